//! Photo response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Photo, VoteChoice, VoteOutcome};

/// Photo response
#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub username: String,
    pub user_profile_picture: String,
    pub category_id: Uuid,
    pub image_url: String,
    pub uploaded_at: DateTime<Utc>,
    pub likes: u32,
    pub dislikes: u32,
    pub score: i64,
    pub is_archived: bool,
    /// The viewer's standing vote, if signed in and voted
    pub my_vote: Option<VoteChoice>,
}

impl PhotoResponse {
    pub fn from_photo(photo: &Photo, viewer: Option<Uuid>) -> Self {
        Self {
            id: photo.id,
            user_id: photo.user_id,
            username: photo.username.clone(),
            user_profile_picture: photo.user_profile_picture.clone(),
            category_id: photo.category_id,
            image_url: photo.image_url.clone(),
            uploaded_at: photo.uploaded_at,
            likes: photo.likes(),
            dislikes: photo.dislikes(),
            score: photo.score(),
            is_archived: photo.is_archived,
            my_vote: viewer.and_then(|viewer| photo.votes().vote_of(&viewer)),
        }
    }
}

/// Vote result
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub outcome: VoteOutcome,
    pub photo: PhotoResponse,
}
