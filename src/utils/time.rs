//! Time utilities

use chrono::{DateTime, NaiveDate, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Label for a calendar month, e.g. "November 2024"
pub fn month_label(at: DateTime<Utc>) -> String {
    at.format("%B %Y").to_string()
}

/// Label for a week identified by its last day, e.g. "Week of Dec 08"
pub fn week_label(week_ending: NaiveDate) -> String {
    format!("Week of {}", week_ending.format("%b %d"))
}
