//! Similarity scoring engine.
//!
//! Orchestrates the segmenter, an embedding provider and the flat index.
//! [`ScoringEngine::load`] runs once at startup and either succeeds into the
//! ready state or fails fatally; a constructed engine is immutable and serves
//! [`score`](ScoringEngine::score) concurrently without locking.
//!
//! The strategy is picked by configuration at construction
//! ([`StrategyConfig`]), never by parallel code paths:
//!
//! - **Dense**: ground truth → sentences → embeddings → index; each request
//!   embeds the prompt and takes the top-1 inner-product hit.
//! - **Classifier**: each request jointly encodes prompt and raw ground
//!   truth; no segmentation or index is involved.
//!
//! There is no reload. If the ground truth changes, build a fresh engine and
//! swap the `Arc` — an index is never mutated while a search is in flight.

pub mod error;
pub mod types;


pub use error::{LoadError, ScoreError};
pub use types::{ScoreResult, StrategyKind};

use std::path::PathBuf;

use tracing::{debug, info};

use crate::constants::DEFAULT_TOP_K;
use crate::embedding::{ClassifierConfig, DenseConfig, DenseEmbedder, PairClassifier};
use crate::index::FlatIpIndex;
use crate::segment::{SentenceUnit, segment};

/// Strategy selection plus its provider configuration.
#[derive(Debug, Clone)]
pub enum StrategyConfig {
    Dense(DenseConfig),
    Classifier(ClassifierConfig),
}

impl StrategyConfig {
    pub fn kind(&self) -> StrategyKind {
        match self {
            StrategyConfig::Dense(_) => StrategyKind::Dense,
            StrategyConfig::Classifier(_) => StrategyKind::Classifier,
        }
    }
}

/// Everything [`ScoringEngine::load`] needs.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Plain-text ground-truth file, read fully into memory at load.
    pub ground_truth_path: PathBuf,
    pub strategy: StrategyConfig,
}

impl EngineConfig {
    pub fn new<P: Into<PathBuf>>(ground_truth_path: P, strategy: StrategyConfig) -> Self {
        Self {
            ground_truth_path: ground_truth_path.into(),
            strategy,
        }
    }
}

#[derive(Debug)]
enum Backend {
    Dense {
        embedder: DenseEmbedder,
        index: FlatIpIndex,
        sentences: Vec<SentenceUnit>,
    },
    Classifier {
        classifier: PairClassifier,
    },
}

/// Ready-state similarity engine.
///
/// Existence of a value IS readiness: `load` either returns a fully built
/// engine or an error, never something half-initialized.
#[derive(Debug)]
pub struct ScoringEngine {
    ground_truth: String,
    backend: Backend,
}

impl ScoringEngine {
    /// Reads the ground truth, prepares the selected strategy and returns a
    /// ready engine. Every failure here is fatal to startup.
    pub fn load(config: EngineConfig) -> Result<Self, LoadError> {
        let ground_truth = std::fs::read_to_string(&config.ground_truth_path).map_err(|source| {
            LoadError::GroundTruthUnreadable {
                path: config.ground_truth_path.clone(),
                source,
            }
        })?;

        let sentences = segment(&ground_truth);
        if sentences.is_empty() {
            return Err(LoadError::EmptyGroundTruth {
                path: config.ground_truth_path.clone(),
            });
        }

        let backend = match config.strategy {
            StrategyConfig::Dense(dense_config) => {
                let embedder = DenseEmbedder::load(dense_config)?;

                let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
                let vectors = embedder.embed_batch(&texts)?;
                let index = FlatIpIndex::build(vectors)?;

                info!(
                    ground_truth = %config.ground_truth_path.display(),
                    sentences = sentences.len(),
                    embedding_dim = index.dim(),
                    "Dense scoring engine ready"
                );

                Backend::Dense {
                    embedder,
                    index,
                    sentences,
                }
            }
            StrategyConfig::Classifier(classifier_config) => {
                let classifier = PairClassifier::load(classifier_config)?;

                info!(
                    ground_truth = %config.ground_truth_path.display(),
                    "Classifier scoring engine ready"
                );

                Backend::Classifier { classifier }
            }
        };

        Ok(Self {
            ground_truth,
            backend,
        })
    }

    /// Scores one prompt against the ground truth.
    ///
    /// Empty prompts are not special-cased here; they pass through to the
    /// provider, and a provider rejection surfaces as
    /// [`ScoreError::InvalidInput`] rather than a default score.
    pub fn score(&self, prompt: &str) -> Result<ScoreResult, ScoreError> {
        let similarity_score = match &self.backend {
            Backend::Dense {
                embedder, index, ..
            } => {
                let embedding = embedder.embed(prompt)?;
                let hits = index.search(&embedding, DEFAULT_TOP_K)?;
                // build() rejects an empty corpus, so the top hit exists
                hits[0].score
            }
            Backend::Classifier { classifier } => {
                classifier.score_pair(prompt, &self.ground_truth)?
            }
        };

        debug!(
            prompt_len = prompt.len(),
            similarity_score,
            strategy = %self.strategy(),
            "Scored prompt"
        );

        Ok(ScoreResult::new(prompt, similarity_score))
    }

    /// Returns the `k` best-matching sentences for `prompt`.
    ///
    /// Dense strategy only; the classifier keeps no sentence index.
    pub fn top_matches(
        &self,
        prompt: &str,
        k: usize,
    ) -> Result<Vec<(f32, &SentenceUnit)>, ScoreError> {
        let Backend::Dense {
            embedder,
            index,
            sentences,
        } = &self.backend
        else {
            return Err(ScoreError::InvalidInput {
                reason: "top-k retrieval requires the dense strategy".to_string(),
            });
        };

        let embedding = embedder.embed(prompt)?;
        let hits = index.search(&embedding, k)?;

        Ok(hits
            .into_iter()
            .map(|hit| (hit.score, &sentences[hit.ordinal]))
            .collect())
    }

    pub fn strategy(&self) -> StrategyKind {
        match &self.backend {
            Backend::Dense { .. } => StrategyKind::Dense,
            Backend::Classifier { .. } => StrategyKind::Classifier,
        }
    }

    /// The raw ground-truth text, untouched since load.
    pub fn ground_truth(&self) -> &str {
        &self.ground_truth
    }

    /// The indexed sentence units (empty for the classifier strategy).
    pub fn sentences(&self) -> &[SentenceUnit] {
        match &self.backend {
            Backend::Dense { sentences, .. } => sentences,
            Backend::Classifier { .. } => &[],
        }
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences().len()
    }

    /// Returns `true` if the underlying provider runs in stub mode.
    pub fn is_stub(&self) -> bool {
        match &self.backend {
            Backend::Dense { embedder, .. } => embedder.is_stub(),
            Backend::Classifier { classifier } => !classifier.is_model_loaded(),
        }
    }
}
