use axum::{Json, extract::State};
use tracing::{debug, instrument};

use crate::gateway::error::GatewayError;
use crate::gateway::payload::{SimilarityRequest, SimilarityResponse};
use crate::gateway::state::HandlerState;

/// Scores one prompt against the engine's ground truth.
#[instrument(skip(state, request), fields(prompt_len = request.prompt.len()))]
pub async fn similarity_handler(
    State(state): State<HandlerState>,
    Json(request): Json<SimilarityRequest>,
) -> Result<Json<SimilarityResponse>, GatewayError> {
    debug!("Processing similarity request");

    let engine = state.engine.clone();
    let prompt = request.prompt;

    // Model inference is synchronous and potentially slow; keep it off the
    // async worker threads. Request-level timeouts belong to the hosting
    // boundary, not the engine.
    let result = tokio::task::spawn_blocking(move || engine.score(&prompt))
        .await
        .map_err(|e| GatewayError::Internal(format!("Scoring task failed: {}", e)))??;

    debug!(
        similarity_score = result.similarity_score,
        "Similarity request complete"
    );

    Ok(Json(SimilarityResponse {
        similarity_score: result.similarity_score,
    }))
}
