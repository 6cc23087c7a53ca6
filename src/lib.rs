//! SnapRank - Photo Voting and Ranking Service
//!
//! This library provides the core of SnapRank, where users upload photos
//! into themed categories, vote on each other's photos and climb derived
//! leaderboards and the hall of fame.
//!
//! # Features
//!
//! - Like/dislike voting with toggle semantics
//! - Per-category leaderboards with rank points
//! - Hall of fame across overall, monthly and category scopes
//! - Private categories joined by share code
//! - Weekly categories that close and award badges
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic
//! - **Repositories**: Store access
//! - **Models**: Domain models
//! - **Ranking**: Pure leaderboard and hall of fame derivation

pub mod access;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod ranking;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use handlers::create_router;
pub use state::AppState;
