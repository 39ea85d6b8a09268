//! Simquery library crate (used by the server and integration tests).
//!
//! Scores how similar a prompt is to a fixed reference text ("ground
//! truth"), via one of two interchangeable strategies:
//!
//! - **Dense**: segment the ground truth into sentences, embed them, and
//!   report the best cosine match for the prompt.
//! - **Classifier**: jointly encode prompt and ground truth through a
//!   sequence-classification head and report a probability.
//!
//! # Public API Surface
//!
//! The exports are organized by module:
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`ScoringEngine`], [`EngineConfig`], [`StrategyConfig`] - The engine
//! - [`ScoreResult`], [`StrategyKind`] - Scoring outcomes
//! - [`LoadError`], [`ScoreError`] - Engine error taxonomy
//!
//! ## Providers & Index
//! - [`DenseEmbedder`], [`DenseConfig`] - Sentence embedding
//! - [`PairClassifier`], [`ClassifierConfig`] - Joint pair classification
//! - [`FlatIpIndex`], [`SearchHit`] - Exact inner-product search
//! - [`segment`], [`SentenceUnit`] - Ground-truth segmentation
//!
//! ## Gateway
//! - [`gateway::create_router_with_state`], [`gateway::HandlerState`] - the
//!   axum HTTP surface used by the `simquery` binary
//!
//! Both providers support a deterministic stub mode so the whole stack runs
//! without model files in tests.

pub mod config;
pub mod constants;
pub mod embedding;
pub mod engine;
pub mod gateway;
pub mod index;
pub mod segment;

pub use config::{Config, ConfigError, DEFAULT_GROUND_TRUTH_PATH};
pub use constants::{DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, DEFAULT_TOP_K};
pub use embedding::{
    ClassifierConfig, DENSE_EMBEDDING_DIM, DENSE_MAX_SEQ_LEN, DenseConfig, DenseEmbedder,
    EmbeddingError, PAIR_SEPARATOR, PairClassifier,
};
pub use engine::{
    EngineConfig, LoadError, ScoreError, ScoreResult, ScoringEngine, StrategyConfig, StrategyKind,
};
pub use gateway::{HandlerState, SimilarityRequest, SimilarityResponse, create_router_with_state};
pub use index::{FlatIpIndex, IndexError, SearchHit, inner_product};
pub use segment::{SentenceUnit, segment};
