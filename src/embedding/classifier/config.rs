use std::path::PathBuf;

/// Separator placed between prompt and reference before joint encoding.
///
/// Design constant, never user input.
pub const PAIR_SEPARATOR: &str = " => ";

/// Token limit for the combined prompt-and-reference encoding. Inputs
/// beyond this are head-truncated (earliest tokens kept).
pub const MAX_SEQ_LEN: usize = crate::constants::DEFAULT_MAX_SEQ_LEN;

#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Directory holding the classification checkpoint. `None` selects the
    /// deterministic stub.
    pub model_dir: Option<PathBuf>,

    pub max_seq_len: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model_dir: None,
            max_seq_len: MAX_SEQ_LEN,
        }
    }
}

impl ClassifierConfig {
    /// Env var used to locate the classifier model directory.
    pub const ENV_MODEL_DIR: &'static str = "SIMQUERY_CLASSIFIER_PATH";

    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: Some(model_dir.into()),
            ..Default::default()
        }
    }

    pub fn stub() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let model_dir = std::env::var(Self::ENV_MODEL_DIR)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            model_dir,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_seq_len == 0 {
            return Err("max_seq_len must be positive".to_string());
        }

        if let Some(ref path) = self.model_dir
            && path.as_os_str().is_empty()
        {
            return Err("model_dir cannot be empty when provided".to_string());
        }

        Ok(())
    }
}
