use thiserror::Error;
use timeline_vector_store::VectorStoreError;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Vector store error: {0}")]
    VectorStore(#[from] VectorStoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_vector_store_errors() {
        let err: GraphError =
            VectorStoreError::EmbeddingError("provider down".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Vector store error: Embedding error: provider down"
        );
    }
}
