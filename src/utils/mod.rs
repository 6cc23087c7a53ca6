//! Utility functions

pub mod crypto;
pub mod time;
pub mod validation;

pub use crypto::generate_share_code;
pub use time::{month_label, now_utc, week_label};
pub use validation::{normalize_share_code, validate_username};
