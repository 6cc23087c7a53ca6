//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod auth;
pub mod categories;
pub mod hall_of_fame;
pub mod health;
pub mod photos;
pub mod users;


use axum::{middleware, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::{
    constants::{API_BASE_PATH, MAX_REQUEST_BODY_BYTES},
    middleware::{auth_middleware, logging_middleware},
    state::AppState,
};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/auth", auth::routes())
        .nest("/categories", categories::routes())
        .nest("/photos", photos::routes())
        .nest("/hall-of-fame", hall_of_fame::routes())
        .nest("/users", users::routes())
}

/// Build the full application router.
///
/// Every API route sees the caller's identity when a bearer token is sent;
/// routes that need one reject anonymous callers through the extractor.
pub fn create_router(state: AppState) -> Router {
    let api = routes().layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .nest(API_BASE_PATH, api)
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
