//! HTTP gateway (Axum) for the scoring engine.
//!
//! This module is primarily used by the `simquery` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::similarity_handler;
pub use payload::{SimilarityRequest, SimilarityResponse};
pub use state::HandlerState;

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/get-similarity", post(similarity_handler))
        .layer(TraceLayer::new_for_http())
        // The reference deployment serves a browser frontend from another
        // origin.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub engine: &'static str,
    pub strategy: &'static str,
    pub provider_mode: &'static str,
    pub sentence_count: usize,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (StatusCode::OK, Json(HealthResponse { status: "ok" })).into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Response {
    // Engine construction precedes router construction, so reaching this
    // handler implies a ready engine; the probe reports its shape.
    let components = ComponentStatus {
        http: "ready",
        engine: "ready",
        strategy: state.engine.strategy().as_str(),
        provider_mode: if state.engine.is_stub() {
            "stub"
        } else {
            "real"
        },
        sentence_count: state.engine.sentence_count(),
    };

    (
        StatusCode::OK,
        Json(ReadyResponse {
            status: "ok",
            components,
        }),
    )
        .into_response()
}
