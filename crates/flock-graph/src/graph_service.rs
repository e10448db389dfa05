use crate::GraphConfig;

use flock_core::{validation, Account, AccountSummary, CoreError, FollowEdge, Result};
use flock_db::{rollback, AccountRepository, DbError, FollowRepository};
use flock_identity::Caller;

use log::{debug, info};
use sqlx::SqlitePool;

/// Social Graph component: follow/unfollow edges, follower and following
/// listings, profile and bio reads/writes, username search, and account
/// deletion with its cascade.
///
/// Mutations run check-then-write inside one transaction; the schema's
/// constraints (duplicate edge, self-edge, dangling endpoint) close the
/// remaining race window as typed errors.
pub struct GraphService {
    pool: SqlitePool,
    config: GraphConfig,
}

impl GraphService {
    pub fn new(pool: SqlitePool, config: GraphConfig) -> Self {
        Self { pool, config }
    }

    /// Create a follow edge from the caller to `target_username` and return
    /// the caller's updated following list.
    pub async fn follow(
        &self,
        caller: &Caller,
        target_username: &str,
    ) -> Result<Vec<AccountSummary>> {
        if caller.username == target_username {
            return Err(CoreError::validation("you cannot follow yourself", None));
        }

        let mut tx = self.pool.begin().await.map_err(DbError::from)?;
        let outcome: Result<Vec<AccountSummary>> = async {
            let Some(target) =
                AccountRepository::find_by_username(&mut *tx, target_username).await?
            else {
                return Err(CoreError::not_found(format!(
                    "no account named '{target_username}'"
                )));
            };
            // The name check above can miss after a rename; ids cannot
            if target.id == caller.account_id {
                return Err(CoreError::validation("you cannot follow yourself", None));
            }
            if AccountRepository::find_by_id(&mut *tx, caller.account_id)
                .await?
                .is_none()
            {
                return Err(CoreError::unauthorized("caller account no longer exists"));
            }
            if FollowRepository::exists(&mut *tx, caller.account_id, target.id).await? {
                return Err(CoreError::conflict("already following this account"));
            }
            FollowRepository::insert(&mut *tx, &FollowEdge::new(caller.account_id, target.id))
                .await?;

            let following = FollowRepository::list_following(&mut *tx, caller.account_id).await?;
            Ok(following)
        }
        .await;

        match outcome {
            Ok(following) => {
                tx.commit().await.map_err(DbError::from)?;
                info!("'{}' now follows '{}'", caller.username, target_username);
                Ok(following)
            }
            Err(e) => {
                rollback(tx, "follow").await;
                Err(e)
            }
        }
    }

    /// Remove the follow edge from the caller to `target_username` and
    /// return the caller's updated following list.
    pub async fn unfollow(
        &self,
        caller: &Caller,
        target_username: &str,
    ) -> Result<Vec<AccountSummary>> {
        let mut tx = self.pool.begin().await.map_err(DbError::from)?;
        let outcome: Result<Vec<AccountSummary>> = async {
            let Some(target) =
                AccountRepository::find_by_username(&mut *tx, target_username).await?
            else {
                return Err(CoreError::not_found(format!(
                    "no account named '{target_username}'"
                )));
            };
            let removed =
                FollowRepository::delete(&mut *tx, caller.account_id, target.id).await?;
            if removed == 0 {
                return Err(CoreError::not_found("you are not following this account"));
            }

            let following = FollowRepository::list_following(&mut *tx, caller.account_id).await?;
            Ok(following)
        }
        .await;

        match outcome {
            Ok(following) => {
                tx.commit().await.map_err(DbError::from)?;
                info!("'{}' unfollowed '{}'", caller.username, target_username);
                Ok(following)
            }
            Err(e) => {
                rollback(tx, "unfollow").await;
                Err(e)
            }
        }
    }

    /// Accounts following `username`. Public.
    pub async fn followers(&self, username: &str) -> Result<Vec<AccountSummary>> {
        let account = self.load_account(username).await?;
        let followers = FollowRepository::list_followers(&self.pool, account.id).await?;

        debug!("Listed {} followers of '{}'", followers.len(), username);
        Ok(followers)
    }

    /// Accounts that `username` follows. Public.
    pub async fn following(&self, username: &str) -> Result<Vec<AccountSummary>> {
        let account = self.load_account(username).await?;
        let following = FollowRepository::list_following(&self.pool, account.id).await?;

        debug!("'{}' follows {} accounts", username, following.len());
        Ok(following)
    }

    /// Case-insensitive substring search over usernames, capped at the
    /// configured result limit.
    pub async fn search(&self, query: &str) -> Result<Vec<AccountSummary>> {
        let fragment = validation::validate_search_query(query)?;

        let results = AccountRepository::search_by_username(
            &self.pool,
            fragment,
            self.config.max_search_results,
        )
        .await?;

        debug!("Search '{}' matched {} accounts", fragment, results.len());
        Ok(results)
    }

    /// Public profile of `username`.
    pub async fn profile(&self, username: &str) -> Result<AccountSummary> {
        let account = self.load_account(username).await?;
        Ok(account.summary())
    }

    /// Bio of `username`. `None` means never set or deleted.
    pub async fn bio(&self, username: &str) -> Result<Option<String>> {
        let account = self.load_account(username).await?;
        Ok(account.bio)
    }

    /// Set the caller's bio. An empty string is a valid bio, distinct from
    /// an absent one.
    pub async fn set_bio(&self, caller: &Caller, username: &str, bio: &str) -> Result<String> {
        validation::validate_bio(bio, self.config.max_bio_length)?;

        let mut tx = self.pool.begin().await.map_err(DbError::from)?;
        let outcome: Result<()> = async {
            let account =
                Self::load_owned_account(&mut tx, caller, username, "you can only edit your own bio")
                    .await?;
            AccountRepository::update_bio(&mut *tx, account.id, Some(bio)).await?;
            Ok(())
        }
        .await;

        match outcome {
            Ok(()) => {
                tx.commit().await.map_err(DbError::from)?;
                info!("Bio updated for '{}'", username);
                Ok(bio.to_string())
            }
            Err(e) => {
                rollback(tx, "set_bio").await;
                Err(e)
            }
        }
    }

    /// Clear the caller's bio back to the absent state.
    pub async fn delete_bio(&self, caller: &Caller, username: &str) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(DbError::from)?;
        let outcome: Result<()> = async {
            let account =
                Self::load_owned_account(&mut tx, caller, username, "you can only edit your own bio")
                    .await?;
            AccountRepository::update_bio(&mut *tx, account.id, None).await?;
            Ok(())
        }
        .await;

        match outcome {
            Ok(()) => {
                tx.commit().await.map_err(DbError::from)?;
                info!("Bio deleted for '{}'", username);
                Ok(())
            }
            Err(e) => {
                rollback(tx, "delete_bio").await;
                Err(e)
            }
        }
    }

    /// Delete the caller's account: every follow edge touching it in either
    /// direction, then the account row, in one transaction.
    pub async fn delete_account(&self, caller: &Caller, username: &str) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(DbError::from)?;
        let outcome: Result<u64> = async {
            let account = Self::load_owned_account(
                &mut tx,
                caller,
                username,
                "you can only delete your own account",
            )
            .await?;
            let edges_removed =
                FollowRepository::delete_all_for_account(&mut *tx, account.id).await?;
            AccountRepository::delete(&mut *tx, account.id).await?;
            Ok(edges_removed)
        }
        .await;

        match outcome {
            Ok(edges_removed) => {
                tx.commit().await.map_err(DbError::from)?;
                info!(
                    "Deleted account '{}' and {} follow edges",
                    username, edges_removed
                );
                Ok(())
            }
            Err(e) => {
                rollback(tx, "delete_account").await;
                Err(e)
            }
        }
    }

    async fn load_account(&self, username: &str) -> Result<Account> {
        AccountRepository::find_by_username(&self.pool, username)
            .await?
            .ok_or_else(|| CoreError::not_found(format!("no account named '{username}'")))
    }

    /// Load the account at `username` and require the caller to own it.
    /// The uniform rule for every mutation addressed by path username.
    async fn load_owned_account(
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        caller: &Caller,
        username: &str,
        denied: &str,
    ) -> Result<Account> {
        let Some(account) = AccountRepository::find_by_username(&mut **tx, username).await? else {
            return Err(CoreError::not_found(format!("no account named '{username}'")));
        };
        if account.id != caller.account_id {
            return Err(CoreError::forbidden(denied));
        }
        Ok(account)
    }
}
