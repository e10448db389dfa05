//! Profile and account lifecycle REST handlers

use crate::state::AppState;
use crate::{
    ApiResult, CallerIdentity, ChangePasswordRequest, ChangePasswordResponse, DeleteResponse,
    ProfileResponse, UpdateUsernameRequest, UpdateUsernameResponse,
};

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/users/{username}
///
/// Public profile for an account
pub async fn get_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<ProfileResponse>> {
    let summary = state.graph.profile(&username).await?;

    Ok(Json(ProfileResponse {
        user: summary.into(),
    }))
}

/// DELETE /api/users/{username}
///
/// Delete the caller's own account together with its follow edges
pub async fn delete_account(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(username): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    state.graph.delete_account(&caller, &username).await?;

    Ok(Json(DeleteResponse {
        message: format!("Account '{}' deleted", username),
    }))
}

/// PUT /api/users/{username}/username
///
/// Rename the caller's own account
pub async fn change_username(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(username): Path<String>,
    Json(request): Json<UpdateUsernameRequest>,
) -> ApiResult<Json<UpdateUsernameResponse>> {
    let (account, access_token) = state
        .identity
        .change_username(&caller, &username, &request.new_username)
        .await?;

    Ok(Json(UpdateUsernameResponse {
        username: account.username,
        access_token,
    }))
}

/// PUT /api/users/{username}/changePassword
///
/// Replace the caller's own password
pub async fn change_password(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(username): Path<String>,
    Json(request): Json<ChangePasswordRequest>,
) -> ApiResult<Json<ChangePasswordResponse>> {
    state
        .identity
        .change_password(&caller, &username, &request.new_password)
        .await?;

    Ok(Json(ChangePasswordResponse { username }))
}
