//! Health check handlers

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub categories: usize,
    pub photos: usize,
}

/// Health check endpoint, with a peek at the store size
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store().await;

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        categories: store.categories.len(),
        photos: store.photos.len(),
    })
}

/// Health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
