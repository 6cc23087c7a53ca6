//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

use crate::constants::{MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH};

static USERNAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_-]*$").expect("username pattern is valid")
});

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if (username.len() as u64) < MIN_USERNAME_LENGTH {
        return Err("Username must be at least 3 characters");
    }
    if username.len() as u64 > MAX_USERNAME_LENGTH {
        return Err("Username must be at most 32 characters");
    }
    if !USERNAME_PATTERN.is_match(username) {
        return Err(
            "Username must start with a letter and contain only letters, numbers, underscores, and hyphens",
        );
    }
    Ok(())
}

/// `validator` adapter for [`validate_username`]
pub fn username_format(username: &str) -> Result<(), ValidationError> {
    validate_username(username).map_err(|message| {
        ValidationError::new("username_format").with_message(message.into())
    })
}

/// Trim surrounding whitespace from a typed share code.
///
/// Matching stays exact, so case is preserved.
pub fn normalize_share_code(code: &str) -> &str {
    code.trim()
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}
