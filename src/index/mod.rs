//! Flat inner-product similarity index.
//!
//! Exact brute-force scan over the corpus vectors. Corpus and query vectors
//! must be unit-normalized upstream so the inner product equals cosine
//! similarity; the index does not normalize internally. Exactness is a test
//! requirement: no approximate-search drift is permitted.


use std::cmp::Ordering;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("cannot build an index over an empty corpus")]
    EmptyCorpus,

    #[error("invalid vector dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("top-k must be positive")]
    ZeroTopK,
}

/// One search result: similarity score plus the corpus ordinal it refers to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    pub score: f32,
    pub ordinal: usize,
}

/// Immutable inner-product index over one corpus.
///
/// Built once per ground-truth load and read-only thereafter; a changed
/// corpus means a wholesale rebuild, never in-place mutation. `&self`-only
/// search makes concurrent reads safe.
#[derive(Debug)]
pub struct FlatIpIndex {
    dim: usize,
    vectors: Vec<Vec<f32>>,
}

impl FlatIpIndex {
    /// Builds the index, validating that every vector shares one dimension.
    pub fn build(vectors: Vec<Vec<f32>>) -> Result<Self, IndexError> {
        let Some(first) = vectors.first() else {
            return Err(IndexError::EmptyCorpus);
        };

        let dim = first.len();
        for vector in &vectors {
            if vector.len() != dim {
                return Err(IndexError::DimensionMismatch {
                    expected: dim,
                    actual: vector.len(),
                });
            }
        }

        debug!(corpus_size = vectors.len(), dim, "Built flat IP index");

        Ok(Self { dim, vectors })
    }

    /// Number of corpus vectors (never zero for a built index).
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Vector dimension accepted by [`search`](Self::search).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the `min(k, corpus size)` best hits, scores descending, equal
    /// scores broken by corpus ordinal.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>, IndexError> {
        if k == 0 {
            return Err(IndexError::ZeroTopK);
        }

        if query.len() != self.dim {
            return Err(IndexError::DimensionMismatch {
                expected: self.dim,
                actual: query.len(),
            });
        }

        let mut hits: Vec<SearchHit> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(ordinal, vector)| SearchHit {
                score: inner_product(query, vector),
                ordinal,
            })
            .collect();

        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then(a.ordinal.cmp(&b.ordinal))
        });

        hits.truncate(k.min(self.vectors.len()));

        Ok(hits)
    }
}

#[inline]
pub fn inner_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
