//! Photo grid orderings for a category view

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Photo;

/// Sort option offered on the category page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhotoSort {
    /// Newest upload first
    Recent,
    /// Most likes per hour since upload first
    Trending,
    /// Highest score first
    #[default]
    Leaderboard,
}

/// Order photos for display. All orderings are stable.
pub fn sort_photos(photos: &mut [&Photo], sort: PhotoSort, now: DateTime<Utc>) {
    match sort {
        PhotoSort::Recent => photos.sort_by_key(|photo| Reverse(photo.uploaded_at)),
        PhotoSort::Trending => photos.sort_by(|a, b| {
            b.likes_per_hour(now).total_cmp(&a.likes_per_hour(now))
        }),
        PhotoSort::Leaderboard => photos.sort_by_key(|photo| Reverse(photo.score())),
    }
}
