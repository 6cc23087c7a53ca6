//! Category repository

use uuid::Uuid;

use crate::{db::Store, models::Category};

/// Repository for category records
pub struct CategoryRepository;

impl CategoryRepository {
    /// Insert a new category
    pub fn create(store: &mut Store, category: Category) -> &Category {
        store.categories.push(category);
        &store.categories[store.categories.len() - 1]
    }

    /// Find category by ID
    pub fn find_by_id<'a>(store: &'a Store, id: &Uuid) -> Option<&'a Category> {
        store.categories.iter().find(|category| category.id == *id)
    }

    /// Find category by ID for modification
    pub fn find_by_id_mut<'a>(store: &'a mut Store, id: &Uuid) -> Option<&'a mut Category> {
        store.categories.iter_mut().find(|category| category.id == *id)
    }

    /// Find category by exact name
    pub fn find_by_name<'a>(store: &'a Store, name: &str) -> Option<&'a Category> {
        store.categories.iter().find(|category| category.name == name)
    }

    /// Check if any private category already uses a share code
    pub fn share_code_exists(store: &Store, code: &str) -> bool {
        store
            .categories
            .iter()
            .any(|category| category.share_code() == Some(code))
    }

    /// All categories in creation order
    pub fn list(store: &Store) -> &[Category] {
        &store.categories
    }
}
