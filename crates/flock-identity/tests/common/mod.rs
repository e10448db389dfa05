#![allow(dead_code)]

use flock_auth::{JwtValidator, TokenIssuer};
use flock_core::NewAccount;
use flock_identity::IdentityService;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub const TEST_MAX_BIO_LENGTH: usize = 1000;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("../flock-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub fn create_test_service(pool: SqlitePool) -> IdentityService {
    IdentityService::new(
        pool,
        TokenIssuer::with_hs256(TEST_SECRET, 3600),
        JwtValidator::with_hs256(TEST_SECRET),
        TEST_MAX_BIO_LENGTH,
    )
}

/// Registration input with per-user password and email
pub fn registration(username: &str) -> NewAccount {
    NewAccount {
        username: username.to_string(),
        password: format!("{username}-password"),
        email: format!("{username}@example.com"),
        bio: None,
    }
}
