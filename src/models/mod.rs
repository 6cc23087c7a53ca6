//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod category;
pub mod photo;
pub mod user;

pub use category::*;
pub use photo::*;
pub use user::*;
