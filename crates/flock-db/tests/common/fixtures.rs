#![allow(dead_code)]

use flock_core::Account;
use flock_db::AccountRepository;

use sqlx::SqlitePool;

/// Creates a test Account with a placeholder credential hash
pub fn create_test_account(username: &str) -> Account {
    Account::new(
        username.to_string(),
        format!("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$nothashed-{username}"),
        format!("{username}@example.com"),
        None,
    )
}

/// Inserts a test account and returns it
pub async fn insert_test_account(pool: &SqlitePool, username: &str) -> Account {
    let account = create_test_account(username);
    AccountRepository::insert(pool, &account)
        .await
        .expect("Failed to insert test account");
    account
}
