//! Category response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    handlers::photos::response::PhotoResponse,
    models::Category,
    ranking::{LeaderboardEntry, PhotoSort},
};

/// Category response
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_active: bool,
    pub is_archived: bool,
    pub created_by: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_ending: Option<NaiveDate>,
    /// Only shown to people who can already see the private category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_count: Option<usize>,
    pub created_at: DateTime<Utc>,
}

impl CategoryResponse {
    /// Build the response for a viewer who passed the access gate
    pub fn from_category(category: &Category) -> Self {
        let is_private = category.is_private();

        Self {
            id: category.id,
            name: category.name.clone(),
            kind: category.kind.to_string(),
            is_active: category.is_active,
            is_archived: category.is_archived,
            created_by: category.created_by,
            week_ending: category.week_ending(),
            share_code: category.share_code().map(str::to_string),
            member_count: is_private.then(|| category.members().len()),
            created_at: category.created_at,
        }
    }
}

/// Categories grouped the way the home page lists them
#[derive(Debug, Default, Serialize)]
pub struct CategoriesListResponse {
    pub official_basic: Vec<CategoryResponse>,
    pub official_weekly: Vec<CategoryResponse>,
    pub archived_weekly: Vec<CategoryResponse>,
    pub user_created: Vec<CategoryResponse>,
    pub private: Vec<CategoryResponse>,
}

/// Category page: the category and its photo grid
#[derive(Debug, Serialize)]
pub struct CategoryDetailResponse {
    pub category: CategoryResponse,
    pub sort: PhotoSort,
    pub photos: Vec<PhotoResponse>,
}

/// Category leaderboard
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub category_id: Uuid,
    pub category_name: String,
    pub entries: Vec<LeaderboardEntry>,
    pub updated_at: DateTime<Utc>,
}

/// Badge handed out when a weekly category or a month closes
#[derive(Debug, Serialize)]
pub struct AwardedBadge {
    pub user_id: Uuid,
    pub username: String,
    pub rank: u32,
    pub period: String,
}

/// Result of archiving a weekly category
#[derive(Debug, Serialize)]
pub struct ArchiveCategoryResponse {
    pub category: CategoryResponse,
    pub awarded: Vec<AwardedBadge>,
}
