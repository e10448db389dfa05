//! Username search REST handler

use crate::state::AppState;
use crate::{AccountDto, ApiResult, SearchQuery, SearchResponse};

use axum::{
    Json,
    extract::{Query, State},
};

/// GET /api/users/search?q=
///
/// Case-insensitive substring search over usernames
pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<SearchResponse>> {
    let users = state.graph.search(&query.q).await?;

    Ok(Json(SearchResponse {
        users: users.into_iter().map(AccountDto::from).collect(),
    }))
}
