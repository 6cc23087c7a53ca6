//! Category handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Category routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_categories))
        .route("/", post(handler::create_category))
        .route("/join", post(handler::join_category))
        .route("/{id}", get(handler::get_category))
        .route("/{id}/leaderboard", get(handler::get_leaderboard))
        .route("/{id}/archive", post(handler::archive_category))
}
