//! Service endpoints: welcome and health.

use axum::{extract::State, Json};

use crate::api::AppState;
use crate::models::{Envelope, HealthResponse};

/// Handler for GET /api/v1
pub async fn welcome() -> Json<Envelope<()>> {
    Json(Envelope::message("Welcome to the beginning of Nothingness"))
}

/// Handler for GET /health
///
/// Reports verdict cache statistics when caching is enabled.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let cache = match &state.cache {
        Some(cache) => Some(cache.stats().await),
        None => None,
    };
    Json(HealthResponse::healthy(cache))
}
