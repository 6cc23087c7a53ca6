//! Photo repository

use uuid::Uuid;

use crate::{db::Store, models::Photo};

/// Repository for photo records
pub struct PhotoRepository;

impl PhotoRepository {
    /// Insert a new photo at the front, keeping newest first
    pub fn create(store: &mut Store, photo: Photo) -> &Photo {
        store.photos.insert(0, photo);
        &store.photos[0]
    }

    /// Find photo by ID
    pub fn find_by_id<'a>(store: &'a Store, id: &Uuid) -> Option<&'a Photo> {
        store.photos.iter().find(|photo| photo.id == *id)
    }

    /// Find photo by ID for modification
    pub fn find_by_id_mut<'a>(store: &'a mut Store, id: &Uuid) -> Option<&'a mut Photo> {
        store.photos.iter_mut().find(|photo| photo.id == *id)
    }

    /// Remove a photo permanently, returning it if it existed
    pub fn delete(store: &mut Store, id: &Uuid) -> Option<Photo> {
        let index = store.photos.iter().position(|photo| photo.id == *id)?;
        Some(store.photos.remove(index))
    }

    /// Live (non-archived) photos of a category, in store order
    pub fn list_live_by_category<'a>(store: &'a Store, category_id: &Uuid) -> Vec<&'a Photo> {
        store
            .photos
            .iter()
            .filter(|photo| photo.category_id == *category_id && !photo.is_archived)
            .collect()
    }

    /// All photos uploaded by a user, archived included
    pub fn list_by_user<'a>(store: &'a Store, user_id: &Uuid) -> Vec<&'a Photo> {
        store
            .photos
            .iter()
            .filter(|photo| photo.user_id == *user_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{member, photo_with_votes};

    #[test]
    fn test_newest_first_and_live_filter() {
        let mut store = Store::new();
        let owner = member("alex_photo");
        let category = Uuid::new_v4();

        let first =
            PhotoRepository::create(&mut store, photo_with_votes(&owner, category, 1, 0)).id;
        let second =
            PhotoRepository::create(&mut store, photo_with_votes(&owner, category, 2, 0)).id;
        PhotoRepository::create(&mut store, photo_with_votes(&owner, Uuid::new_v4(), 3, 0));
        PhotoRepository::find_by_id_mut(&mut store, &first).unwrap().is_archived = true;

        let live: Vec<Uuid> = PhotoRepository::list_live_by_category(&store, &category)
            .iter()
            .map(|photo| photo.id)
            .collect();
        assert_eq!(live, vec![second]);
        assert_eq!(PhotoRepository::list_by_user(&store, &owner.id).len(), 3);
    }

    #[test]
    fn test_delete() {
        let mut store = Store::new();
        let owner = member("alex_photo");
        let id =
            PhotoRepository::create(&mut store, photo_with_votes(&owner, Uuid::new_v4(), 0, 0)).id;

        assert!(PhotoRepository::delete(&mut store, &id).is_some());
        assert!(PhotoRepository::delete(&mut store, &id).is_none());
        assert!(store.photos.is_empty());
    }
}
