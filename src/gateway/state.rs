use std::sync::Arc;

use crate::engine::ScoringEngine;

/// Shared handler state: one ready engine, constructed before the router
/// and injected rather than reached through a global.
#[derive(Clone)]
pub struct HandlerState {
    pub engine: Arc<ScoringEngine>,
}

impl HandlerState {
    pub fn new(engine: Arc<ScoringEngine>) -> Self {
        Self { engine }
    }
}
