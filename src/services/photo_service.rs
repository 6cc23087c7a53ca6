//! Photo service

use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    access,
    db::{
        repositories::{CategoryRepository, PhotoRepository, UserRepository},
        Store,
    },
    error::{AppError, AppResult},
    handlers::photos::{
        request::UploadPhotoRequest,
        response::{PhotoResponse, VoteResponse},
    },
    models::{Photo, VoteChoice},
};

/// Photo service for business logic
pub struct PhotoService;

impl PhotoService {
    /// Add a new photo with no votes to an open category
    pub fn upload_photo(
        store: &mut Store,
        user_id: &Uuid,
        payload: UploadPhotoRequest,
    ) -> AppResult<PhotoResponse> {
        let owner = UserRepository::find_by_id(store, user_id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let category = CategoryRepository::find_by_id(store, &payload.category_id)
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        access::require_access(category, Some(*user_id))?;

        if !category.accepts_submissions() {
            return Err(AppError::Conflict(
                "Category is closed for uploads".to_string(),
            ));
        }

        let photo = Photo::new(owner, category.id, &payload.image_url);
        let photo = PhotoRepository::create(store, photo);

        info!(
            photo_id = %photo.id,
            category_id = %photo.category_id,
            user_id = %user_id,
            "Photo uploaded"
        );

        Ok(PhotoResponse::from_photo(photo, Some(*user_id)))
    }

    /// Toggle a vote on a photo.
    ///
    /// The caller must be able to see the photo's category, and archived
    /// categories take no more votes.
    pub fn vote(
        store: &mut Store,
        photo_id: &Uuid,
        voter_id: &Uuid,
        choice: VoteChoice,
    ) -> AppResult<VoteResponse> {
        let category_id = PhotoRepository::find_by_id(store, photo_id)
            .map(|photo| photo.category_id)
            .ok_or_else(|| AppError::NotFound("Photo not found".to_string()))?;

        let category = CategoryRepository::find_by_id(store, &category_id)
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        access::require_access(category, Some(*voter_id))?;

        if category.is_archived {
            return Err(AppError::Conflict(
                "Voting has closed for this category".to_string(),
            ));
        }

        let photo = PhotoRepository::find_by_id_mut(store, photo_id)
            .ok_or_else(|| AppError::NotFound("Photo not found".to_string()))?;

        let outcome = photo.apply_vote(*voter_id, choice);

        debug!(
            photo_id = %photo_id,
            voter_id = %voter_id,
            choice = ?choice,
            outcome = %outcome,
            likes = photo.likes(),
            dislikes = photo.dislikes(),
            "Vote applied"
        );

        Ok(VoteResponse {
            outcome,
            photo: PhotoResponse::from_photo(photo, Some(*voter_id)),
        })
    }

    /// Hide one of the caller's photos from rankings
    pub fn archive_photo(
        store: &mut Store,
        photo_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<PhotoResponse> {
        let photo = PhotoRepository::find_by_id_mut(store, photo_id)
            .ok_or_else(|| AppError::NotFound("Photo not found".to_string()))?;

        if photo.user_id != *user_id {
            return Err(AppError::Forbidden(
                "Only the owner can archive this photo".to_string(),
            ));
        }

        photo.is_archived = true;
        info!(photo_id = %photo_id, user_id = %user_id, "Photo archived");

        Ok(PhotoResponse::from_photo(photo, Some(*user_id)))
    }

    /// Remove one of the caller's photos permanently
    pub fn delete_photo(store: &mut Store, photo_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        let photo = PhotoRepository::find_by_id(store, photo_id)
            .ok_or_else(|| AppError::NotFound("Photo not found".to_string()))?;

        if photo.user_id != *user_id {
            return Err(AppError::Forbidden(
                "Only the owner can delete this photo".to_string(),
            ));
        }

        PhotoRepository::delete(store, photo_id);
        info!(photo_id = %photo_id, user_id = %user_id, "Photo deleted");

        Ok(())
    }
}
