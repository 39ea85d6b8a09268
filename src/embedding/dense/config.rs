use std::path::PathBuf;

use crate::embedding::error::EmbeddingError;

/// Default dense embedding dimension (stub output size).
pub const DENSE_EMBEDDING_DIM: usize = crate::constants::DEFAULT_EMBEDDING_DIM;

/// Default dense max sequence length.
pub const DENSE_MAX_SEQ_LEN: usize = crate::constants::DEFAULT_MAX_SEQ_LEN;

#[derive(Debug, Clone)]
/// Configuration for [`DenseEmbedder`](super::DenseEmbedder).
pub struct DenseConfig {
    /// Directory holding `config.json`, `model.safetensors` and
    /// `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Max tokens to consider per input.
    pub max_seq_len: usize,
    /// Output dimension in stub mode; a loaded model reports its own
    /// hidden size instead.
    pub embedding_dim: usize,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for DenseConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            max_seq_len: DENSE_MAX_SEQ_LEN,
            embedding_dim: DENSE_EMBEDDING_DIM,
            testing_stub: false,
        }
    }
}

impl DenseConfig {
    /// Env var used to locate the model directory.
    pub const ENV_MODEL_DIR: &'static str = "SIMQUERY_MODEL_PATH";

    /// Loads config from the environment (a missing value becomes an empty
    /// path).
    pub fn from_env() -> Self {
        let model_dir = std::env::var(Self::ENV_MODEL_DIR)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_default();

        Self {
            model_dir,
            ..Default::default()
        }
    }

    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.testing_stub {
            return Ok(());
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.model_dir.is_dir() {
            return Err(EmbeddingError::ModelNotFound {
                path: self.model_dir.clone(),
            });
        }

        Ok(())
    }

    /// Returns `true` if the weight and config files exist.
    pub fn model_available(&self) -> bool {
        self.model_dir.join("config.json").is_file()
            && self.model_dir.join("model.safetensors").is_file()
    }

    /// Returns `true` if `tokenizer.json` exists.
    pub fn tokenizer_available(&self) -> bool {
        self.model_dir.join("tokenizer.json").is_file()
    }
}
