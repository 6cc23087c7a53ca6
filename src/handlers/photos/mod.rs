//! Photo upload, voting and management handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{delete, post},
    Router,
};

use crate::state::AppState;

/// Photo routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handler::upload_photo))
        .route("/{id}", delete(handler::delete_photo))
        .route("/{id}/vote", post(handler::vote_photo))
        .route("/{id}/archive", post(handler::archive_photo))
}
