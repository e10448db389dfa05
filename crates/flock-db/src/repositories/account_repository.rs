use crate::{DbError, error::Result as DbErrorResult};

use flock_core::{Account, AccountSummary};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

/// Row-level access to the accounts table. Methods take any executor so
/// multi-step operations can run inside one transaction.
pub struct AccountRepository;

impl AccountRepository {
    pub async fn insert<'e, E>(executor: E, account: &Account) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id = account.id.to_string();
        let created_at = account.created_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO accounts (id, username, password_hash, email, bio, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&account.username)
        .bind(&account.password_hash)
        .bind(&account.email)
        .bind(account.bio.as_deref())
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Account>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, username, password_hash, email, bio, created_at
                FROM accounts
                WHERE id = ?
            "#,
        )
        .bind(&id_str)
        .fetch_optional(executor)
        .await?;

        row.map(|r| map_account(&r)).transpose()
    }

    pub async fn find_by_username<'e, E>(
        executor: E,
        username: &str,
    ) -> DbErrorResult<Option<Account>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, username, password_hash, email, bio, created_at
                FROM accounts
                WHERE username = ?
            "#,
        )
        .bind(username)
        .fetch_optional(executor)
        .await?;

        row.map(|r| map_account(&r)).transpose()
    }

    pub async fn find_by_email<'e, E>(executor: E, email: &str) -> DbErrorResult<Option<Account>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT id, username, password_hash, email, bio, created_at
                FROM accounts
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(executor)
        .await?;

        row.map(|r| map_account(&r)).transpose()
    }

    pub async fn update_username<'e, E>(
        executor: E,
        id: Uuid,
        new_username: &str,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id_str = id.to_string();

        sqlx::query("UPDATE accounts SET username = ? WHERE id = ?")
            .bind(new_username)
            .bind(&id_str)
            .execute(executor)
            .await?;

        Ok(())
    }

    pub async fn update_password_hash<'e, E>(
        executor: E,
        id: Uuid,
        password_hash: &str,
    ) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id_str = id.to_string();

        sqlx::query("UPDATE accounts SET password_hash = ? WHERE id = ?")
            .bind(password_hash)
            .bind(&id_str)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// `None` clears the bio; `Some("")` stores an empty one. The two states
    /// stay distinct all the way down.
    pub async fn update_bio<'e, E>(executor: E, id: Uuid, bio: Option<&str>) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id_str = id.to_string();

        sqlx::query("UPDATE accounts SET bio = ? WHERE id = ?")
            .bind(bio)
            .bind(&id_str)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// Returns the number of rows removed (0 or 1).
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id_str = id.to_string();

        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(&id_str)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }

    /// Case-insensitive substring match over usernames, capped at `limit`.
    /// LIKE metacharacters in the fragment are escaped so they match
    /// literally.
    pub async fn search_by_username<'e, E>(
        executor: E,
        fragment: &str,
        limit: i64,
    ) -> DbErrorResult<Vec<AccountSummary>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let pattern = like_pattern(fragment);

        let rows = sqlx::query(
            r#"
                SELECT id, username, email, bio, created_at
                FROM accounts
                WHERE username LIKE ? ESCAPE '\'
                ORDER BY username ASC
                LIMIT ?
            "#,
        )
        .bind(&pattern)
        .bind(limit)
        .fetch_all(executor)
        .await?;

        rows.iter().map(map_summary).collect()
    }
}

/// Wrap a fragment in `%` wildcards, escaping any literal `%`, `_`, or `\`.
fn like_pattern(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    escaped.push('%');
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn map_account(row: &SqliteRow) -> DbErrorResult<Account> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(Account {
        id: parse_uuid(&id)?,
        username: row.try_get("username")?,
        password_hash: row.try_get("password_hash")?,
        email: row.try_get("email")?,
        bio: row.try_get("bio")?,
        created_at: parse_timestamp(created_at)?,
    })
}

pub(crate) fn map_summary(row: &SqliteRow) -> DbErrorResult<AccountSummary> {
    let id: String = row.try_get("id")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(AccountSummary {
        id: parse_uuid(&id)?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        bio: row.try_get("bio")?,
        created_at: parse_timestamp(created_at)?,
    })
}

pub(crate) fn parse_uuid(value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::Decode {
        message: format!("invalid uuid in row: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

pub(crate) fn parse_timestamp(value: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0).ok_or_else(|| DbError::Decode {
        message: format!("invalid timestamp in row: {}", value),
        location: ErrorLocation::from(Location::caller()),
    })
}
