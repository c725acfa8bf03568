//! # Timeline Vector Store
//!
//! Embedding abstraction and in-memory similarity search for causal graph
//! construction.
//!
//! ## Architecture
//!
//! ```text
//! Event summaries
//!     │
//!     ├──> EmbeddingProvider
//!     │      └─> L2-normalized Vector[f32], deterministic per text
//!     │
//!     └──> FlatIndex
//!            └─> exact inner-product k-NN (cosine on normalized vectors)
//! ```
//!
//! A fresh index is built per graph construction and discarded with it;
//! nothing here retains cross-request state.

mod embeddings;
mod error;
mod flat_index;

pub use embeddings::{cosine_similarity, EmbeddingProvider, HashEmbedding};
pub use error::{Result, VectorStoreError};
pub use flat_index::FlatIndex;
