use serde::{Deserialize, Serialize};

/// Wire request for the scoring endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SimilarityRequest {
    pub prompt: String,
}

/// Wire response carrying the single scalar score.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SimilarityResponse {
    pub similarity_score: f32,
}
