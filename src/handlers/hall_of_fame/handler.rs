//! Hall of fame handler implementations

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    middleware::auth::{AuthenticatedUser, OptionalAuth},
    services::RankingService,
    state::AppState,
    utils::now_utc,
};

use super::{
    request::HallOfFameQuery,
    response::{HallOfFameResponse, MonthlyAwardResponse},
};

/// Get the most liked photos for a scope
pub async fn get_hall_of_fame(
    State(state): State<AppState>,
    auth: OptionalAuth,
    Query(query): Query<HallOfFameQuery>,
) -> AppResult<Json<HallOfFameResponse>> {
    let scope = query.into_scope()?;

    let store = state.store().await;
    let response = RankingService::get_hall_of_fame(&store, scope, auth.user_id(), now_utc())?;

    Ok(Json(response))
}

/// Close the current month and award hall of fame badges (admin only)
pub async fn award_monthly_badges(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<MonthlyAwardResponse>> {
    let mut store = state.store_mut().await;
    let result = RankingService::award_monthly_badges(&mut store, &auth_user, now_utc())?;

    Ok(Json(result))
}
