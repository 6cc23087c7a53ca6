//! Category request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::{constants::MAX_CATEGORY_NAME_LENGTH, ranking::PhotoSort};

/// Category variant requested at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NewCategoryKind {
    OfficialBasic,
    OfficialWeekly,
    UserCreated,
    Private,
}

/// Create category request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = MAX_CATEGORY_NAME_LENGTH))]
    pub name: String,

    /// official-basic, official-weekly, user-created or private
    #[serde(rename = "type")]
    pub kind: NewCategoryKind,

    /// Last day of the week, required for weekly categories
    pub week_ending: Option<NaiveDate>,
}

/// Join private category request
#[derive(Debug, Deserialize, Validate)]
pub struct JoinCategoryRequest {
    #[validate(length(min = 1, max = 64))]
    pub share_code: String,
}

/// Category detail query parameters
#[derive(Debug, Default, Deserialize)]
pub struct CategoryQuery {
    /// recent, trending or leaderboard (default)
    pub sort: Option<PhotoSort>,
}
