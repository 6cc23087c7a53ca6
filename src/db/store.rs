//! Store contents

use crate::models::{Category, Photo, User};

/// All application records.
///
/// `AppState` owns exactly one store behind a lock; repositories take it
/// by reference. Photos are kept newest first.
#[derive(Debug, Default)]
pub struct Store {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub photos: Vec<Photo>,
    /// Month labels whose hall of fame badges were already handed out
    pub awarded_months: Vec<String>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}
