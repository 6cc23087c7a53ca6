//! Hall of fame aggregation

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    constants::{ALL_TIME_PERIOD, HALL_OF_FAME_LIMIT, UNKNOWN_CATEGORY_NAME},
    models::{Category, Photo},
};

/// Window over which the best photos are collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HallOfFameScope {
    /// Every live photo
    Overall,
    /// Every live photo, optionally narrowed to one category
    Monthly(Option<Uuid>),
    /// Live photos of exactly one category
    Category(Uuid),
}

impl HallOfFameScope {
    /// Whether a photo falls inside this scope
    pub fn includes(&self, photo: &Photo) -> bool {
        if photo.is_archived {
            return false;
        }

        match self {
            Self::Overall | Self::Monthly(None) => true,
            Self::Monthly(Some(category_id)) | Self::Category(category_id) => {
                photo.category_id == *category_id
            }
        }
    }

    /// Display label for the period, e.g. "November 2024"
    pub fn period_label(&self, now: DateTime<Utc>) -> String {
        match self {
            Self::Monthly(_) => crate::utils::time::month_label(now),
            Self::Overall | Self::Category(_) => ALL_TIME_PERIOD.to_string(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Monthly(_) => "monthly",
            Self::Category(_) => "category",
        }
    }
}

/// One hall of fame row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HallOfFameEntry {
    pub rank: u32,
    pub likes: u32,
    pub photo_id: Uuid,
    pub photo_url: String,
    pub user_id: Uuid,
    pub username: String,
    pub profile_picture: String,
    pub category_id: Uuid,
    pub category_name: String,
}

/// Collect the most liked photos in `scope`.
///
/// Ordering uses raw likes only; dislikes do not count here. Equal like
/// counts keep input order and the result holds at most 20 entries.
pub fn compute_hall_of_fame<'a, I>(
    scope: HallOfFameScope,
    photos: I,
    categories: &[Category],
) -> Vec<HallOfFameEntry>
where
    I: IntoIterator<Item = &'a Photo>,
{
    let mut entries: Vec<HallOfFameEntry> = photos
        .into_iter()
        .filter(|photo| scope.includes(photo))
        .map(|photo| HallOfFameEntry {
            rank: 0,
            likes: photo.likes(),
            photo_id: photo.id,
            photo_url: photo.image_url.clone(),
            user_id: photo.user_id,
            username: photo.username.clone(),
            profile_picture: photo.user_profile_picture.clone(),
            category_id: photo.category_id,
            category_name: category_name(categories, &photo.category_id),
        })
        .collect();

    entries.sort_by_key(|entry| Reverse(entry.likes));
    entries.truncate(HALL_OF_FAME_LIMIT);

    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = index as u32 + 1;
    }

    entries
}

fn category_name(categories: &[Category], category_id: &Uuid) -> String {
    categories
        .iter()
        .find(|category| category.id == *category_id)
        .map(|category| category.name.clone())
        .unwrap_or_else(|| UNKNOWN_CATEGORY_NAME.to_string())
}
