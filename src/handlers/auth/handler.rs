//! Authentication handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::AuthService,
    state::AppState,
};

use super::{
    request::{LoginRequest, RegisterRequest},
    response::{AuthResponse, CurrentUserResponse, UserResponse},
};

/// Register a new user and sign them in
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    payload.validate()?;

    // Hash before taking the store lock
    let password_hash = AuthService::hash_password(&payload.password)?;

    let user = {
        let mut store = state.store_mut().await;
        AuthService::register(
            &mut store,
            state.config(),
            &payload.username,
            &payload.email,
            password_hash,
            payload.profile_picture.as_deref(),
        )?
    };

    let (access_token, expires_in) = AuthService::generate_access_token(&user, state.config())?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user: UserResponse::from(&user),
        }),
    ))
}

/// Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    // Verify after the read guard is dropped; argon2 is slow
    let account = {
        let store = state.store().await;
        AuthService::find_login_account(&store, &payload.email)?
    };

    let (user, access_token, expires_in) =
        AuthService::login(account, state.config(), &payload.password)?;

    Ok(Json(AuthResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in,
        user: UserResponse::from(&user),
    }))
}

/// Get current authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<CurrentUserResponse>> {
    let store = state.store().await;
    let user = UserRepository::find_by_id(&store, &auth_user.id)
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(CurrentUserResponse {
        user: UserResponse::from(user),
    }))
}
