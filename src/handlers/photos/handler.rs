//! Photo handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    services::PhotoService,
    state::AppState,
};

use super::{
    request::{UploadPhotoRequest, VoteRequest},
    response::{PhotoResponse, VoteResponse},
};

/// Upload a photo into a category
pub async fn upload_photo(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<UploadPhotoRequest>,
) -> AppResult<(StatusCode, Json<PhotoResponse>)> {
    payload.validate()?;

    let mut store = state.store_mut().await;
    let photo = PhotoService::upload_photo(&mut store, &auth_user.id, payload)?;

    Ok((StatusCode::CREATED, Json(photo)))
}

/// Like or dislike a photo; repeating a vote withdraws it
pub async fn vote_photo(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<VoteRequest>,
) -> AppResult<Json<VoteResponse>> {
    let mut store = state.store_mut().await;
    let result = PhotoService::vote(&mut store, &id, &auth_user.id, payload.vote)?;

    Ok(Json(result))
}

/// Archive one of your photos
pub async fn archive_photo(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<PhotoResponse>> {
    let mut store = state.store_mut().await;
    let photo = PhotoService::archive_photo(&mut store, &id, &auth_user.id)?;

    Ok(Json(photo))
}

/// Delete one of your photos permanently
pub async fn delete_photo(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let mut store = state.store_mut().await;
    PhotoService::delete_photo(&mut store, &id, &auth_user.id)?;

    Ok(StatusCode::NO_CONTENT)
}
