//! User repository

use uuid::Uuid;

use crate::{db::Store, models::User};

/// Repository for user records
pub struct UserRepository;

impl UserRepository {
    /// Insert a new user
    pub fn create(store: &mut Store, user: User) -> &User {
        store.users.push(user);
        &store.users[store.users.len() - 1]
    }

    /// Find user by ID
    pub fn find_by_id<'a>(store: &'a Store, id: &Uuid) -> Option<&'a User> {
        store.users.iter().find(|user| user.id == *id)
    }

    /// Find user by ID for modification
    pub fn find_by_id_mut<'a>(store: &'a mut Store, id: &Uuid) -> Option<&'a mut User> {
        store.users.iter_mut().find(|user| user.id == *id)
    }

    /// Find user by email (case-insensitive)
    pub fn find_by_email<'a>(store: &'a Store, email: &str) -> Option<&'a User> {
        store
            .users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
    }

    /// Check if an email is already registered
    pub fn email_exists(store: &Store, email: &str) -> bool {
        Self::find_by_email(store, email).is_some()
    }
}
