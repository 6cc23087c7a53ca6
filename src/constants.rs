//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 6;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

/// Avatar service used when a user signs up without a profile picture
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const MEMBER: &str = "member";

    /// All user roles
    pub const ALL: &[&str] = &[ADMIN, MEMBER];
}

// =============================================================================
// RANKING
// =============================================================================

/// Points awarded by leaderboard position (index 0 is rank 1)
pub const LEADERBOARD_POINTS: [u32; 10] = [100, 75, 50, 30, 20, 10, 5, 3, 2, 1];

/// Points for any rank past the end of `LEADERBOARD_POINTS`
pub const DEFAULT_LEADERBOARD_POINTS: u32 = 1;

/// Maximum number of hall of fame entries
pub const HALL_OF_FAME_LIMIT: usize = 20;

/// Photos shown for a weekly category once it has been archived
pub const ARCHIVED_WEEKLY_DISPLAY_LIMIT: usize = 10;

/// Leaderboard positions that earn a badge when a weekly category closes
pub const BADGE_AWARD_RANKS: usize = 3;

/// Category label used when a photo points at a category that no longer exists
pub const UNKNOWN_CATEGORY_NAME: &str = "Unknown";

/// Period label for scopes that are not bound to a time window
pub const ALL_TIME_PERIOD: &str = "All time";

// =============================================================================
// CATEGORIES & BADGES
// =============================================================================

/// Length of generated private category share codes
pub const SHARE_CODE_LENGTH: usize = 8;

/// Attempts at generating a share code not already in use
pub const SHARE_CODE_MAX_ATTEMPTS: usize = 16;

/// Maximum category name length
pub const MAX_CATEGORY_NAME_LENGTH: u64 = 64;

/// Maximum number of badges displayed on a profile
pub const MAX_SELECTED_BADGES: usize = 5;

/// Maximum image reference length
pub const MAX_IMAGE_URL_LENGTH: u64 = 2048;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

/// Largest JSON request body accepted (bytes)
pub const MAX_REQUEST_BODY_BYTES: usize = 64 * 1024;
