//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{roles, MAX_SELECTED_BADGES};

/// User account model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub profile_picture: String,
    pub role: String,
    pub badges: Vec<Badge>,
    /// Badge IDs shown on the profile, in display order
    pub selected_badges: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == roles::ADMIN
    }

    /// Badges the user chose to display
    pub fn displayed_badges(&self) -> Vec<&Badge> {
        self.selected_badges
            .iter()
            .filter_map(|id| self.badges.iter().find(|badge| badge.id == *id))
            .collect()
    }

    /// Replace the displayed badge selection.
    ///
    /// Unknown and repeated IDs are dropped and the selection is capped at
    /// `MAX_SELECTED_BADGES`, keeping the caller's order.
    pub fn select_badges(&mut self, badge_ids: &[Uuid]) {
        let mut selected = Vec::with_capacity(MAX_SELECTED_BADGES);
        for id in badge_ids {
            if selected.len() == MAX_SELECTED_BADGES {
                break;
            }
            if selected.contains(id) || !self.badges.iter().any(|badge| badge.id == *id) {
                continue;
            }
            selected.push(*id);
        }
        self.selected_badges = selected;
    }

    /// Record a newly earned badge
    pub fn award_badge(&mut self, badge: Badge) {
        self.badges.push(badge);
    }
}

/// Kind of achievement a badge records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeKind {
    Leaderboard,
    HallOfFame,
}

/// Achievement earned by placing in a leaderboard or the hall of fame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: Uuid,
    pub kind: BadgeKind,
    pub category_name: String,
    pub rank: u32,
    /// Human readable period, e.g. "Week of Nov 20" or "November 2024"
    pub period: String,
    pub awarded_at: DateTime<Utc>,
}

impl Badge {
    pub fn new(kind: BadgeKind, category_name: &str, rank: u32, period: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            category_name: category_name.to_string(),
            rank,
            period: period.to_string(),
            awarded_at: Utc::now(),
        }
    }
}
