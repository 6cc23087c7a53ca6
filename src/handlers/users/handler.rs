//! User handler implementations

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::{AuthenticatedUser, OptionalAuth},
    services::UserService,
    state::AppState,
};

use super::{
    request::SelectBadgesRequest,
    response::{SelectedBadgesResponse, UserProfileResponse},
};

/// Get a user's profile
pub async fn get_user_profile(
    State(state): State<AppState>,
    auth: OptionalAuth,
    Path(id): Path<Uuid>,
) -> AppResult<Json<UserProfileResponse>> {
    let store = state.store().await;
    let profile = UserService::get_profile(&store, &id, auth.user_id())?;

    Ok(Json(profile))
}

/// Choose which earned badges the caller displays
pub async fn update_selected_badges(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<SelectBadgesRequest>,
) -> AppResult<Json<SelectedBadgesResponse>> {
    payload.validate()?;

    let mut store = state.store_mut().await;
    let selected =
        UserService::update_selected_badges(&mut store, &auth_user.id, &payload.badge_ids)?;

    Ok(Json(selected))
}
