use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use error_location::ErrorLocation;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{Sqlite, SqlitePool, Transaction};

const MAX_CONNECTIONS: u32 = 10;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open (or create) the database file, apply migrations, and return a pool.
///
/// Foreign key enforcement is part of the connect options so every pooled
/// connection gets it, not just the first.
#[track_caller]
pub async fn create_pool(database_path: &Path) -> DbErrorResult<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(BUSY_TIMEOUT)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    log::info!("Running database migrations");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| DbError::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(pool)
}

/// Roll back a transaction after a failed operation.
///
/// A rollback failure is logged and otherwise swallowed so the original
/// error is the one that propagates.
pub async fn rollback(tx: Transaction<'_, Sqlite>, operation: &str) {
    if let Err(e) = tx.rollback().await {
        log::error!("Rollback after failed {} also failed: {}", operation, e);
    }
}
