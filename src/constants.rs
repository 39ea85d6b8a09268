//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary values from primary ones to avoid drift.

/// Default embedding dimension produced by the dense provider.
///
/// Matches the stub output size; a real model overrides this with its own
/// hidden size at load time.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Maximum token count fed to either BERT backend.
pub const DEFAULT_MAX_SEQ_LEN: usize = 512;

/// Number of nearest sentences the engine retrieves per request.
///
/// The index keeps a general top-k contract; the service only ever asks
/// for the single best match.
pub const DEFAULT_TOP_K: usize = 1;
