//! Hall of fame request DTOs

use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    ranking::HallOfFameScope,
};

/// Scope names accepted in the query string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScopeParam {
    #[default]
    Overall,
    Monthly,
    Category,
}

/// Hall of fame query parameters
#[derive(Debug, Default, Deserialize)]
pub struct HallOfFameQuery {
    pub scope: Option<ScopeParam>,
    pub category_id: Option<Uuid>,
}

impl HallOfFameQuery {
    /// Resolve the query into a scope; the category scope needs an id
    pub fn into_scope(self) -> AppResult<HallOfFameScope> {
        match self.scope.unwrap_or_default() {
            ScopeParam::Overall => Ok(HallOfFameScope::Overall),
            ScopeParam::Monthly => Ok(HallOfFameScope::Monthly(self.category_id)),
            ScopeParam::Category => self
                .category_id
                .map(HallOfFameScope::Category)
                .ok_or_else(|| {
                    AppError::InvalidInput(
                        "category_id is required for the category scope".to_string(),
                    )
                }),
        }
    }
}
