//! Embedding providers + model utilities.
//!
//! - [`dense`] provides sentence embedding for the dense strategy.
//! - [`classifier`] provides joint pair scoring for the classifier strategy.
//!
//! Both providers share [`EmbeddingError`] and select between a real candle
//! BERT backend and a deterministic stub at construction time.

/// BERT wrappers (plain encoder + classification head).
pub mod bert;
/// Joint pair classifier.
pub mod classifier;
/// Dense sentence embedder.
pub mod dense;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Tokenizer/model loading helpers.
pub mod utils;

pub use classifier::{ClassifierConfig, MAX_SEQ_LEN, PAIR_SEPARATOR, PairClassifier};
pub use dense::{DENSE_EMBEDDING_DIM, DENSE_MAX_SEQ_LEN, DenseConfig, DenseEmbedder};
pub use error::EmbeddingError;
