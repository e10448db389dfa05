pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    account_dto::AccountDto,
    auth::{
        auth::{login, register},
        auth_response::AuthResponse,
        login_request::LoginRequest,
        register_request::RegisterRequest,
    },
    bio::{
        bio::{delete_bio, get_bio, set_bio},
        bio_response::BioResponse,
        update_bio_request::UpdateBioRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller::CallerIdentity,
    follows::{
        follower_list_response::FollowerListResponse,
        following_response::FollowingResponse,
        follows::{follow, list_followers, list_following, unfollow},
    },
    search::{search::search_users, search_query::SearchQuery, search_response::SearchResponse},
    users::{
        change_password_request::ChangePasswordRequest,
        change_password_response::ChangePasswordResponse,
        profile_response::ProfileResponse,
        update_username_request::UpdateUsernameRequest,
        update_username_response::UpdateUsernameResponse,
        users::{change_password, change_username, delete_account, get_profile},
    },
};

pub use crate::routes::build_router;

use crate::state::AppState;

use flock_auth::{JwtValidator, TokenIssuer};
use flock_graph::{GraphConfig, GraphService};
use flock_identity::IdentityService;

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up a local .env before reading configuration
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = flock_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = flock_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting flock-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool and apply migrations
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = flock_db::create_pool(&database_path).await?;
    info!("Database ready");

    // Issuing and validating share the one configured secret
    let Some(ref jwt_secret) = config.auth.jwt_secret else {
        unreachable!("validate() ensures auth.jwt_secret is set")
    };
    let issuer = TokenIssuer::with_hs256(jwt_secret.as_bytes(), config.auth.token_ttl_secs as i64);
    let validator = JwtValidator::with_hs256(jwt_secret.as_bytes());

    let identity = Arc::new(IdentityService::new(
        pool.clone(),
        issuer,
        validator,
        config.validation.max_bio_length,
    ));
    let graph = Arc::new(GraphService::new(
        pool.clone(),
        GraphConfig {
            max_bio_length: config.validation.max_bio_length,
            max_search_results: config.validation.max_search_results,
        },
    ));

    // Build router
    let app = build_router(AppState {
        pool,
        identity,
        graph,
    });

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server, draining in-flight requests on SIGINT
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => error!("Failed to listen for SIGINT: {}", e),
    }
}
