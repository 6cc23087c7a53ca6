//! Ranking engine
//!
//! Everything here is a pure function over in-memory photos:
//!
//! 1. **Leaderboard** (`leaderboard.rs`): per-category standings by score
//!    (likes minus dislikes) with rank-based points.
//!
//! 2. **Hall of fame** (`hall_of_fame.rs`): the most liked photos across an
//!    overall, monthly or single-category scope, capped at the top 20.
//!
//! 3. **Feed** (`feed.rs`): display orderings for a category's photo grid
//!    (recent, trending, leaderboard).

pub mod feed;
pub mod hall_of_fame;
pub mod leaderboard;

pub use feed::{sort_photos, PhotoSort};
pub use hall_of_fame::{compute_hall_of_fame, HallOfFameEntry, HallOfFameScope};
pub use leaderboard::{compute_leaderboard, points_for_rank, LeaderboardEntry};
