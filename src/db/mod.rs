//! In-memory data store
//!
//! This module holds the store that replaces a database, its seed data,
//! and the repositories that read and write it.

pub mod repositories;
pub mod seed;
pub mod store;

pub use seed::seed_official_catalog;
pub use store::Store;
