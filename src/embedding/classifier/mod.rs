//! Pair classifier (joint prompt-and-reference scoring).
//!
//! Concatenates the prompt and the full ground truth with
//! [`PAIR_SEPARATOR`], encodes the pair through a single-logit BERT
//! classification head, and squashes the logit through a sigmoid so the
//! score is always a probability.

/// Classifier configuration.
pub mod config;


pub use config::{ClassifierConfig, MAX_SEQ_LEN, PAIR_SEPARATOR};

use candle_core::Tensor;
use tokenizers::Tokenizer;
use tracing::{debug, info};

use crate::embedding::bert::BertClassifier;
use crate::embedding::device::select_device;
use crate::embedding::error::EmbeddingError;
use crate::embedding::utils::load_tokenizer_with_truncation;

/// Joint prompt/reference scorer for the classifier strategy.
pub struct PairClassifier {
    device: candle_core::Device,
    config: ClassifierConfig,
    model: Option<BertClassifier>,
    tokenizer: Option<Tokenizer>,
}

impl std::fmt::Debug for PairClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PairClassifier")
            .field("device", &format!("{:?}", self.device))
            .field("config", &self.config)
            .field("model_loaded", &self.model.is_some())
            .finish()
    }
}

impl PairClassifier {
    pub fn load(config: ClassifierConfig) -> Result<Self, EmbeddingError> {
        if let Err(msg) = config.validate() {
            return Err(EmbeddingError::InvalidConfig { reason: msg });
        }

        let device = select_device()?;
        debug!(?device, "Selected compute device for pair classifier");

        let Some(model_dir) = config.model_dir.clone() else {
            info!("No classifier model dir configured, operating in stub mode");
            return Ok(Self {
                device,
                config,
                model: None,
                tokenizer: None,
            });
        };

        for required in ["config.json", "model.safetensors", "tokenizer.json"] {
            if !model_dir.join(required).is_file() {
                return Err(EmbeddingError::ModelLoadFailed {
                    reason: format!("Missing {} in {}", required, model_dir.display()),
                });
            }
        }

        let model = BertClassifier::load(&model_dir, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load classification head: {}", e),
            }
        })?;

        let tokenizer = load_tokenizer_with_truncation(&model_dir, config.max_seq_len)
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            })?;

        info!(
            model_dir = %model_dir.display(),
            max_seq_len = config.max_seq_len,
            "Classifier model loaded"
        );

        Ok(Self {
            device,
            config,
            model: Some(model),
            tokenizer: Some(tokenizer),
        })
    }

    pub fn stub() -> Result<Self, EmbeddingError> {
        Self::load(ClassifierConfig::stub())
    }

    /// Scores a (prompt, reference) pair; the result is always in `[0, 1]`.
    pub fn score_pair(&self, prompt: &str, reference: &str) -> Result<f32, EmbeddingError> {
        debug!(
            prompt_len = prompt.len(),
            reference_len = reference.len(),
            model_loaded = self.model.is_some(),
            "Scoring prompt/reference pair"
        );

        if let (Some(model), Some(tokenizer)) = (&self.model, &self.tokenizer) {
            let joined = format!("{prompt}{PAIR_SEPARATOR}{reference}");

            let tokens = tokenizer.encode(joined, true).map_err(|e| {
                EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                }
            })?;

            let token_ids = Tensor::new(tokens.get_ids(), &self.device)?.unsqueeze(0)?;
            let type_ids = Tensor::new(tokens.get_type_ids(), &self.device)?.unsqueeze(0)?;
            let attention_mask =
                Tensor::new(tokens.get_attention_mask(), &self.device)?.unsqueeze(0)?;

            let logits = model
                .forward(&token_ids, &type_ids, Some(&attention_mask))
                .map_err(|e| EmbeddingError::InferenceFailed {
                    reason: e.to_string(),
                })?;

            let logit = logits.flatten_all()?.to_vec1::<f32>()?[0];
            return Ok(sigmoid(logit));
        }

        let score = self.lexical_overlap_score(prompt, reference);

        debug!(score, "Computed score (stub)");

        Ok(score)
    }

    pub fn is_model_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Stub scorer: word-overlap statistics pushed through the same logistic
    /// squash as the real head, so the output range matches.
    fn lexical_overlap_score(&self, prompt: &str, reference: &str) -> f32 {
        use std::collections::HashSet;

        let word_set = |s: &str| -> HashSet<String> {
            s.to_lowercase()
                .split(|c: char| !c.is_alphanumeric())
                .filter(|w| w.len() > 2)
                .map(str::to_string)
                .collect()
        };

        let prompt_words = word_set(prompt);
        let reference_words = word_set(reference);

        if prompt_words.is_empty() || reference_words.is_empty() {
            return sigmoid(-4.0);
        }

        let matches = prompt_words.intersection(&reference_words).count();
        let recall = matches as f32 / prompt_words.len() as f32;
        let union = prompt_words.union(&reference_words).count();
        let jaccard = matches as f32 / union as f32;

        let overlap = 0.6 * recall + 0.4 * jaccard;

        sigmoid(8.0 * (overlap - 0.5))
    }
}

#[inline]
fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
