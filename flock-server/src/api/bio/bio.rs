//! Bio REST handlers

use crate::state::AppState;
use crate::{ApiResult, BioResponse, CallerIdentity, UpdateBioRequest};

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/users/{username}/bio
pub async fn get_bio(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<BioResponse>> {
    let bio = state.graph.bio(&username).await?;

    Ok(Json(BioResponse { bio }))
}

/// PUT /api/users/{username}/bio
///
/// Set the caller's own bio
pub async fn set_bio(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(username): Path<String>,
    Json(request): Json<UpdateBioRequest>,
) -> ApiResult<Json<BioResponse>> {
    let bio = state.graph.set_bio(&caller, &username, &request.bio).await?;

    Ok(Json(BioResponse { bio: Some(bio) }))
}

/// DELETE /api/users/{username}/bio
///
/// Clear the caller's own bio
pub async fn delete_bio(
    State(state): State<AppState>,
    CallerIdentity(caller): CallerIdentity,
    Path(username): Path<String>,
) -> ApiResult<Json<BioResponse>> {
    state.graph.delete_bio(&caller, &username).await?;

    Ok(Json(BioResponse { bio: None }))
}
