use crate::error::Result as DbErrorResult;
use crate::repositories::account_repository::map_summary;

use flock_core::{AccountSummary, FollowEdge};

use uuid::Uuid;

/// Row-level access to the follows table. Methods take any executor so
/// multi-step operations can run inside one transaction.
pub struct FollowRepository;

impl FollowRepository {
    /// Inserting a duplicate edge trips the primary key and surfaces as
    /// `DbError::UniqueViolation`; a self-edge trips the CHECK constraint.
    pub async fn insert<'e, E>(executor: E, edge: &FollowEdge) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let follower_id = edge.follower_id.to_string();
        let followee_id = edge.followee_id.to_string();
        let created_at = edge.created_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO follows (follower_id, followee_id, created_at)
                VALUES (?, ?, ?)
            "#,
        )
        .bind(&follower_id)
        .bind(&followee_id)
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Returns the number of edges removed (0 or 1).
    pub async fn delete<'e, E>(
        executor: E,
        follower_id: Uuid,
        followee_id: Uuid,
    ) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let follower_str = follower_id.to_string();
        let followee_str = followee_id.to_string();

        let result = sqlx::query(
            "DELETE FROM follows WHERE follower_id = ? AND followee_id = ?",
        )
        .bind(&follower_str)
        .bind(&followee_str)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    pub async fn exists<'e, E>(
        executor: E,
        follower_id: Uuid,
        followee_id: Uuid,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let follower_str = follower_id.to_string();
        let followee_str = followee_id.to_string();

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM follows WHERE follower_id = ? AND followee_id = ?",
        )
        .bind(&follower_str)
        .bind(&followee_str)
        .fetch_one(executor)
        .await?;

        Ok(count > 0)
    }

    /// Accounts following `account_id`, ordered by username.
    pub async fn list_followers<'e, E>(
        executor: E,
        account_id: Uuid,
    ) -> DbErrorResult<Vec<AccountSummary>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id_str = account_id.to_string();

        let rows = sqlx::query(
            r#"
                SELECT a.id, a.username, a.email, a.bio, a.created_at
                FROM accounts a
                INNER JOIN follows f ON f.follower_id = a.id
                WHERE f.followee_id = ?
                ORDER BY a.username ASC
            "#,
        )
        .bind(&id_str)
        .fetch_all(executor)
        .await?;

        rows.iter().map(map_summary).collect()
    }

    /// Accounts that `account_id` follows, ordered by username.
    pub async fn list_following<'e, E>(
        executor: E,
        account_id: Uuid,
    ) -> DbErrorResult<Vec<AccountSummary>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id_str = account_id.to_string();

        let rows = sqlx::query(
            r#"
                SELECT a.id, a.username, a.email, a.bio, a.created_at
                FROM accounts a
                INNER JOIN follows f ON f.followee_id = a.id
                WHERE f.follower_id = ?
                ORDER BY a.username ASC
            "#,
        )
        .bind(&id_str)
        .fetch_all(executor)
        .await?;

        rows.iter().map(map_summary).collect()
    }

    /// Remove every edge touching `account_id`, in either direction.
    /// Returns the number of edges removed.
    pub async fn delete_all_for_account<'e, E>(
        executor: E,
        account_id: Uuid,
    ) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let id_str = account_id.to_string();

        let result = sqlx::query(
            "DELETE FROM follows WHERE follower_id = ? OR followee_id = ?",
        )
        .bind(&id_str)
        .bind(&id_str)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }
}
