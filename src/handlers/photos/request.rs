//! Photo request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{constants::MAX_IMAGE_URL_LENGTH, models::VoteChoice};

/// Upload photo request.
///
/// The image itself is hosted elsewhere; only its reference is stored.
#[derive(Debug, Deserialize, Validate)]
pub struct UploadPhotoRequest {
    pub category_id: Uuid,

    #[validate(url, length(max = MAX_IMAGE_URL_LENGTH))]
    pub image_url: String,
}

/// Vote request
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub vote: VoteChoice,
}
