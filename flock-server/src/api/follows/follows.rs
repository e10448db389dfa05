//! Follow graph REST handlers

use crate::state::AppState;
use crate::{AccountDto, ApiResult, CallerIdentity, FollowerListResponse, FollowingResponse};

use axum::{
    Json,
    extract::{Path, State},
};

/// POST /api/users/{username}/follow
///
/// Follow `{username}` and return the caller's updated following list
pub async fn follow(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(username): Path<String>,
) -> ApiResult<Json<FollowingResponse>> {
    let following = state.graph.follow(&caller, &username).await?;

    Ok(Json(FollowingResponse {
        following: following.into_iter().map(AccountDto::from).collect(),
    }))
}

/// POST /api/users/{username}/unfollow
///
/// Remove the caller's follow edge to `{username}` and return the updated list
pub async fn unfollow(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(username): Path<String>,
) -> ApiResult<Json<FollowingResponse>> {
    let following = state.graph.unfollow(&caller, &username).await?;

    Ok(Json(FollowingResponse {
        following: following.into_iter().map(AccountDto::from).collect(),
    }))
}

/// GET /api/users/{username}/followers
pub async fn list_followers(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<FollowerListResponse>> {
    let followers = state.graph.followers(&username).await?;

    Ok(Json(FollowerListResponse {
        followers: followers.into_iter().map(AccountDto::from).collect(),
    }))
}

/// GET /api/users/{username}/following
pub async fn list_following(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<FollowingResponse>> {
    let following = state.graph.following(&username).await?;

    Ok(Json(FollowingResponse {
        following: following.into_iter().map(AccountDto::from).collect(),
    }))
}
