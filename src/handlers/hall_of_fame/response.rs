//! Hall of fame response DTOs

use serde::Serialize;
use uuid::Uuid;

use crate::{handlers::categories::response::AwardedBadge, ranking::HallOfFameEntry};

/// Hall of fame listing
#[derive(Debug, Serialize)]
pub struct HallOfFameResponse {
    pub scope: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    /// e.g. "November 2024" or "All time"
    pub period: String,
    pub entries: Vec<HallOfFameEntry>,
}

/// Badges handed out when a month closes
#[derive(Debug, Serialize)]
pub struct MonthlyAwardResponse {
    pub period: String,
    pub awarded: Vec<AwardedBadge>,
}
