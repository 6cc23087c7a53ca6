//! User request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Replace the badges shown on the caller's profile
#[derive(Debug, Deserialize, Validate)]
pub struct SelectBadgesRequest {
    /// Extra or unknown IDs are dropped rather than rejected
    #[validate(length(max = 64))]
    pub badge_ids: Vec<Uuid>,
}
