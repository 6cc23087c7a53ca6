//! User response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{handlers::photos::response::PhotoResponse, models::Badge};

/// Public profile page
#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub profile_picture: String,
    pub role: String,
    pub badges: Vec<Badge>,
    pub selected_badges: Vec<Badge>,
    /// Owns the top photo of an open weekly category
    pub is_current_leader: bool,
    pub photos: Vec<PhotoResponse>,
    /// Only filled in on the owner's own profile
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub archived_photos: Vec<PhotoResponse>,
    pub created_at: DateTime<Utc>,
}

/// Badge selection after an update
#[derive(Debug, Serialize)]
pub struct SelectedBadgesResponse {
    pub selected_badges: Vec<Badge>,
}
