//! Category leaderboard

use std::cmp::Reverse;

use serde::Serialize;
use uuid::Uuid;

use crate::{
    constants::{DEFAULT_LEADERBOARD_POINTS, LEADERBOARD_POINTS},
    models::Photo,
};

/// One leaderboard row, derived from a photo on every call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub points: u32,
    /// Likes minus dislikes
    pub score: i64,
    pub photo_id: Uuid,
    pub photo_url: String,
    pub user_id: Uuid,
    pub username: String,
    pub profile_picture: String,
}

/// Points awarded for a 1-based rank
pub fn points_for_rank(rank: u32) -> u32 {
    rank.checked_sub(1)
        .and_then(|index| LEADERBOARD_POINTS.get(index as usize))
        .copied()
        .unwrap_or(DEFAULT_LEADERBOARD_POINTS)
}

/// Rank photos by score.
///
/// The caller passes the photos of one category with archived photos
/// already removed. Equal scores keep their input order, so every photo
/// gets its own rank.
pub fn compute_leaderboard<'a, I>(photos: I) -> Vec<LeaderboardEntry>
where
    I: IntoIterator<Item = &'a Photo>,
{
    let mut entries: Vec<LeaderboardEntry> = photos
        .into_iter()
        .map(|photo| LeaderboardEntry {
            rank: 0,
            points: 0,
            score: photo.score(),
            photo_id: photo.id,
            photo_url: photo.image_url.clone(),
            user_id: photo.user_id,
            username: photo.username.clone(),
            profile_picture: photo.user_profile_picture.clone(),
        })
        .collect();

    // sort_by_key is stable
    entries.sort_by_key(|entry| Reverse(entry.score));

    for (index, entry) in entries.iter_mut().enumerate() {
        let rank = index as u32 + 1;
        entry.rank = rank;
        entry.points = points_for_rank(rank);
    }

    entries
}
