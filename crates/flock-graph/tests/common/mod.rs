#![allow(dead_code)]

use flock_core::Account;
use flock_db::AccountRepository;
use flock_graph::{GraphConfig, GraphService};
use flock_identity::Caller;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

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

pub fn create_test_service(pool: SqlitePool) -> GraphService {
    GraphService::new(pool, GraphConfig::default())
}

/// Inserts an account with a placeholder credential hash and returns it
pub async fn insert_test_account(pool: &SqlitePool, username: &str) -> Account {
    let account = Account::new(
        username.to_string(),
        format!("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$nothashed-{username}"),
        format!("{username}@example.com"),
        None,
    );
    AccountRepository::insert(pool, &account)
        .await
        .expect("Failed to insert test account");
    account
}

/// The caller a valid token for this account would resolve to
pub fn caller_for(account: &Account) -> Caller {
    Caller {
        account_id: account.id,
        username: account.username.clone(),
    }
}
