use crate::error::{Result, VectorStoreError};

/// Exact inner-product k-NN over a fixed batch of vectors.
///
/// Brute-force search: corpora here are tens of event summaries, so an
/// approximate structure would only cost determinism. Vector ids are the
/// positions in the batch the index was built from.
#[derive(Debug)]
pub struct FlatIndex {
    dimension: usize,
    vectors: Vec<Vec<f32>>,
}

impl FlatIndex {
    /// Build an index over a batch of vectors. All vectors must share one
    /// dimension; an empty batch yields an empty index.
    pub fn build(vectors: Vec<Vec<f32>>) -> Result<Self> {
        let dimension = vectors.first().map(Vec::len).unwrap_or(0);
        for vector in &vectors {
            if vector.len() != dimension {
                return Err(VectorStoreError::InvalidDimension {
                    expected: dimension,
                    actual: vector.len(),
                });
            }
        }
        log::debug!("Built flat index over {} vectors (dim {dimension})", vectors.len());
        Ok(Self { dimension, vectors })
    }

    /// Top-k matches by inner product, descending. Score ties break by
    /// ascending vector id so results are deterministic.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<(usize, f32)>> {
        if self.vectors.is_empty() {
            return Ok(Vec::new());
        }
        if query.len() != self.dimension {
            return Err(VectorStoreError::InvalidDimension {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let mut scores: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(id, vector)| {
                let score: f32 = query.iter().zip(vector).map(|(q, v)| q * v).sum();
                (id, score)
            })
            .collect();

        scores.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scores.truncate(k);

        Ok(scores)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}
