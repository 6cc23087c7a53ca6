//! HTTP middleware

pub mod auth;
pub mod logging;

pub use auth::{auth_middleware, AuthenticatedUser, OptionalAuth};
pub use logging::logging_middleware;
