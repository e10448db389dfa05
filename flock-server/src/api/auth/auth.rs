//! Registration and login REST handlers

use crate::state::AppState;
use crate::{ApiResult, AuthResponse, LoginRequest, RegisterRequest};

use flock_core::NewAccount;

use axum::{Json, extract::State, http::StatusCode};

/// POST /api/register
///
/// Create an account and return its first identity token
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let new_account = NewAccount {
        username: request.username,
        password: request.password,
        email: request.email,
        bio: request.bio,
    };

    let (account, access_token) = state.identity.register(new_account).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new(&account, access_token)),
    ))
}

/// POST /api/login
///
/// Verify credentials and return a fresh identity token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let (account, access_token) = state
        .identity
        .authenticate(&request.username, &request.password)
        .await?;

    Ok(Json(AuthResponse::new(&account, access_token)))
}
