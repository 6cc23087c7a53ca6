//! Category handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::{AuthenticatedUser, OptionalAuth},
    services::{CategoryService, RankingService},
    state::AppState,
    utils::now_utc,
};

use super::{
    request::{CategoryQuery, CreateCategoryRequest, JoinCategoryRequest},
    response::{
        ArchiveCategoryResponse, CategoriesListResponse, CategoryDetailResponse,
        CategoryResponse, LeaderboardResponse,
    },
};

/// List the categories visible to the caller
pub async fn list_categories(
    State(state): State<AppState>,
    auth: OptionalAuth,
) -> AppResult<Json<CategoriesListResponse>> {
    let store = state.store().await;
    Ok(Json(CategoryService::list_categories(&store, auth.user_id())))
}

/// Create a new category
pub async fn create_category(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    payload.validate()?;

    let mut store = state.store_mut().await;
    let category = CategoryService::create_category(&mut store, &auth_user, payload)?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// Join a private category with its share code
pub async fn join_category(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<JoinCategoryRequest>,
) -> AppResult<Json<CategoryResponse>> {
    payload.validate()?;

    let mut store = state.store_mut().await;
    let category =
        CategoryService::join_private_category(&mut store, &payload.share_code, &auth_user.id)?;

    Ok(Json(category))
}

/// Get a category with its photos
pub async fn get_category(
    State(state): State<AppState>,
    auth: OptionalAuth,
    Path(id): Path<Uuid>,
    Query(query): Query<CategoryQuery>,
) -> AppResult<Json<CategoryDetailResponse>> {
    let store = state.store().await;
    let detail = CategoryService::get_category(
        &store,
        &id,
        auth.user_id(),
        query.sort.unwrap_or_default(),
        now_utc(),
    )?;

    Ok(Json(detail))
}

/// Get the leaderboard of a category
pub async fn get_leaderboard(
    State(state): State<AppState>,
    auth: OptionalAuth,
    Path(id): Path<Uuid>,
) -> AppResult<Json<LeaderboardResponse>> {
    let store = state.store().await;
    let leaderboard = RankingService::get_leaderboard(&store, &id, auth.user_id())?;

    Ok(Json(leaderboard))
}

/// Close a weekly category and award badges (admin only)
pub async fn archive_category(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ArchiveCategoryResponse>> {
    let mut store = state.store_mut().await;
    let result = CategoryService::archive_category(&mut store, &id, &auth_user)?;

    Ok(Json(result))
}
