use std::path::PathBuf;
use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::index::IndexError;

/// Fatal startup errors.
///
/// Any of these aborts `load` entirely; there is no partially-ready engine.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read ground truth at {path}: {source}")]
    GroundTruthUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ground truth at {path} is empty after segmentation")]
    EmptyGroundTruth { path: PathBuf },

    #[error("embedding provider failed to load: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("index build failed: {0}")]
    Index(#[from] IndexError),
}

/// Per-request errors.
///
/// Neither variant corrupts engine state; the engine keeps serving
/// subsequent requests. No retries happen here — retry is a caller concern.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The prompt failed provider-level validation.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Embedding, classification or search failed unexpectedly.
    #[error("engine failure: {reason}")]
    EngineFailure { reason: String },
}

impl From<EmbeddingError> for ScoreError {
    fn from(err: EmbeddingError) -> Self {
        let reason = err.to_string();
        match err {
            EmbeddingError::EmptyInput => ScoreError::InvalidInput { reason },
            _ => ScoreError::EngineFailure { reason },
        }
    }
}

impl From<IndexError> for ScoreError {
    fn from(err: IndexError) -> Self {
        ScoreError::EngineFailure {
            reason: err.to_string(),
        }
    }
}
