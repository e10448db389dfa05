use crate::api::auth::auth::{login, register};
use crate::api::bio::bio::{delete_bio, get_bio, set_bio};
use crate::api::follows::follows::{follow, list_followers, list_following, unfollow};
use crate::api::search::search::search_users;
use crate::api::users::users::{change_password, change_username, delete_account, get_profile};
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Registration and login
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        // Username search (static segment, never captured by {username})
        .route("/api/users/search", get(search_users))
        // Profile and account lifecycle
        .route(
            "/api/users/{username}",
            get(get_profile).delete(delete_account),
        )
        .route("/api/users/{username}/username", put(change_username))
        .route("/api/users/{username}/changePassword", put(change_password))
        // Bio
        .route(
            "/api/users/{username}/bio",
            get(get_bio).put(set_bio).delete(delete_bio),
        )
        // Follow graph
        .route("/api/users/{username}/follow", post(follow))
        .route("/api/users/{username}/unfollow", post(unfollow))
        .route("/api/users/{username}/followers", get(list_followers))
        .route("/api/users/{username}/following", get(list_following))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
