//! Category model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Photo category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub kind: CategoryKind,
    pub is_active: bool,
    pub is_archived: bool,
    /// Creator, absent for official categories
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Category variant.
///
/// Share code and member list only exist on private categories, and the
/// week-ending marker only on weekly ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CategoryKind {
    OfficialBasic,
    OfficialWeekly {
        week_ending: NaiveDate,
    },
    UserCreated,
    Private {
        share_code: String,
        members: Vec<Uuid>,
    },
}

impl CategoryKind {
    /// Wire name of the variant
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OfficialBasic => "official-basic",
            Self::OfficialWeekly { .. } => "official-weekly",
            Self::UserCreated => "user-created",
            Self::Private { .. } => "private",
        }
    }
}

impl std::fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Category {
    pub fn new(name: &str, kind: CategoryKind, created_by: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind,
            is_active: true,
            is_archived: false,
            created_by,
            created_at: Utc::now(),
        }
    }

    pub fn is_private(&self) -> bool {
        matches!(self.kind, CategoryKind::Private { .. })
    }

    pub fn is_weekly(&self) -> bool {
        matches!(self.kind, CategoryKind::OfficialWeekly { .. })
    }

    /// Share code of a private category
    pub fn share_code(&self) -> Option<&str> {
        match &self.kind {
            CategoryKind::Private { share_code, .. } => Some(share_code),
            _ => None,
        }
    }

    /// Members of a private category (empty for every other variant)
    pub fn members(&self) -> &[Uuid] {
        match &self.kind {
            CategoryKind::Private { members, .. } => members,
            _ => &[],
        }
    }

    /// Week-ending marker of a weekly category
    pub fn week_ending(&self) -> Option<NaiveDate> {
        match self.kind {
            CategoryKind::OfficialWeekly { week_ending } => Some(week_ending),
            _ => None,
        }
    }

    /// Add a member to a private category.
    ///
    /// Returns false when the category is not private. A user who is already
    /// a member is not added twice.
    pub fn add_member(&mut self, user_id: Uuid) -> bool {
        match &mut self.kind {
            CategoryKind::Private { members, .. } => {
                if !members.contains(&user_id) {
                    members.push(user_id);
                }
                true
            }
            _ => false,
        }
    }

    /// Whether new uploads and votes are accepted
    pub fn accepts_submissions(&self) -> bool {
        self.is_active && !self.is_archived
    }

    /// Close the category for good
    pub fn archive(&mut self) {
        self.is_archived = true;
        self.is_active = false;
    }
}
