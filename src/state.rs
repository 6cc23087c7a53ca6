//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{config::Config, db::Store};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// All records. Every mutation runs under the write lock, which makes
    /// this lock the single serialization point for votes and joins.
    store: RwLock<Store>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(store: Store, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: RwLock::new(store),
                config,
            }),
        }
    }

    /// Acquire shared read access to the store
    pub async fn store(&self) -> RwLockReadGuard<'_, Store> {
        self.inner.store.read().await
    }

    /// Acquire exclusive write access to the store
    pub async fn store_mut(&self) -> RwLockWriteGuard<'_, Store> {
        self.inner.store.write().await
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
