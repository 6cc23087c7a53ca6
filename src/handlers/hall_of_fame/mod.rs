//! Hall of fame handlers

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

/// Hall of fame routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::get_hall_of_fame))
        .route("/award", post(handler::award_monthly_badges))
}
