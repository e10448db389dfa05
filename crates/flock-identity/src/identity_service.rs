use crate::Caller;

use flock_auth::{hash_password, verify_password, JwtValidator, TokenIssuer};
use flock_core::{validation, Account, CoreError, NewAccount, Result};
use flock_db::{rollback, AccountRepository, DbError};

use log::{debug, error, info};
use sqlx::SqlitePool;

/// Identity & Credential component: registration, login, credential and
/// username changes, and caller resolution for transports.
///
/// Every multi-step mutation runs its checks and writes inside a single
/// transaction; the schema's constraints close the remaining race window.
pub struct IdentityService {
    pool: SqlitePool,
    issuer: TokenIssuer,
    validator: JwtValidator,
    max_bio_length: usize,
}

impl IdentityService {
    pub fn new(
        pool: SqlitePool,
        issuer: TokenIssuer,
        validator: JwtValidator,
        max_bio_length: usize,
    ) -> Self {
        Self {
            pool,
            issuer,
            validator,
            max_bio_length,
        }
    }

    /// Register a new account and issue its first token.
    ///
    /// A concurrent duplicate that slips past the explicit checks trips the
    /// unique constraints and still surfaces as `Conflict`; on any failure
    /// no partial account row is left behind.
    pub async fn register(&self, new_account: NewAccount) -> Result<(Account, String)> {
        validation::validate_username(&new_account.username)?;
        validation::validate_email(&new_account.email)?;
        validation::validate_password(&new_account.password)?;
        if let Some(bio) = &new_account.bio {
            validation::validate_bio(bio, self.max_bio_length)?;
        }

        // Hashing is slow on purpose; do it before the transaction opens.
        let password_hash = hash_password(&new_account.password)?;
        let account = Account::new(
            new_account.username,
            password_hash,
            new_account.email,
            new_account.bio,
        );

        let mut tx = self.pool.begin().await.map_err(DbError::from)?;
        let outcome: Result<String> = async {
            if AccountRepository::find_by_username(&mut *tx, &account.username)
                .await?
                .is_some()
            {
                return Err(CoreError::conflict("username already taken"));
            }
            if AccountRepository::find_by_email(&mut *tx, &account.email)
                .await?
                .is_some()
            {
                return Err(CoreError::conflict("email already registered"));
            }
            AccountRepository::insert(&mut *tx, &account).await?;

            // Signing inside the transaction scope: a signing failure aborts
            // the registration instead of leaving a row behind.
            let token = self.issuer.issue(account.id, &account.username)?;
            Ok(token)
        }
        .await;

        let token = match outcome {
            Ok(token) => {
                tx.commit().await.map_err(DbError::from)?;
                token
            }
            Err(e) => {
                rollback(tx, "register").await;
                return Err(e);
            }
        };

        info!("Registered account '{}'", account.username);
        Ok((account, token))
    }

    /// Verify credentials and issue a fresh token.
    ///
    /// Unknown usernames and wrong passwords produce byte-identical errors.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<(Account, String)> {
        let Some(account) = AccountRepository::find_by_username(&self.pool, username).await? else {
            return Err(CoreError::invalid_credentials());
        };

        let verified = match verify_password(password, &account.password_hash) {
            Ok(verified) => verified,
            Err(e) => {
                // An unreadable stored hash is an operational defect; the
                // caller still just sees bad credentials.
                error!("Credential verification failed for '{}': {}", username, e);
                false
            }
        };
        if !verified {
            return Err(CoreError::invalid_credentials());
        }

        let token = self.issuer.issue(account.id, &account.username)?;
        debug!("Authenticated '{}'", account.username);

        Ok((account, token))
    }

    /// Resolve a bearer token into the caller it was issued to.
    ///
    /// Pure token work; never touches the store.
    pub fn resolve_caller(&self, token: &str) -> Result<Caller> {
        let claims = self.validator.validate(token)?;
        let account_id = claims.account_id()?;

        Ok(Caller {
            account_id,
            username: claims.username,
        })
    }

    /// Rename `username` to `new_username` and issue a token carrying the
    /// new name.
    ///
    /// Tokens already in the wild stay valid: they are bound to the account
    /// id, not the name.
    pub async fn change_username(
        &self,
        caller: &Caller,
        username: &str,
        new_username: &str,
    ) -> Result<(Account, String)> {
        validation::validate_username(new_username)?;

        let mut tx = self.pool.begin().await.map_err(DbError::from)?;
        let outcome: Result<(Account, String)> = async {
            let Some(mut account) = AccountRepository::find_by_username(&mut *tx, username).await?
            else {
                return Err(CoreError::not_found(format!("no account named '{username}'")));
            };
            if account.id != caller.account_id {
                return Err(CoreError::forbidden("you can only change your own username"));
            }
            // Renaming to your own current name is a no-op, not a conflict
            if let Some(existing) =
                AccountRepository::find_by_username(&mut *tx, new_username).await?
            {
                if existing.id != account.id {
                    return Err(CoreError::conflict("username already taken"));
                }
            }
            AccountRepository::update_username(&mut *tx, account.id, new_username).await?;
            account.username = new_username.to_string();

            let token = self.issuer.issue(account.id, &account.username)?;
            Ok((account, token))
        }
        .await;

        match outcome {
            Ok((account, token)) => {
                tx.commit().await.map_err(DbError::from)?;
                info!("Renamed account '{}' to '{}'", username, account.username);
                Ok((account, token))
            }
            Err(e) => {
                rollback(tx, "change_username").await;
                Err(e)
            }
        }
    }

    /// Replace the caller's password. The new password must differ from the
    /// current one.
    pub async fn change_password(
        &self,
        caller: &Caller,
        username: &str,
        new_password: &str,
    ) -> Result<()> {
        validation::validate_password(new_password)?;

        // Hash up front, outside the transaction.
        let new_hash = hash_password(new_password)?;

        let mut tx = self.pool.begin().await.map_err(DbError::from)?;
        let outcome: Result<()> = async {
            let Some(account) = AccountRepository::find_by_username(&mut *tx, username).await?
            else {
                return Err(CoreError::not_found(format!("no account named '{username}'")));
            };
            if account.id != caller.account_id {
                return Err(CoreError::forbidden("you can only change your own password"));
            }
            if verify_password(new_password, &account.password_hash)? {
                return Err(CoreError::validation(
                    "new password must differ from the current password",
                    Some("newPassword"),
                ));
            }
            AccountRepository::update_password_hash(&mut *tx, account.id, &new_hash).await?;
            Ok(())
        }
        .await;

        match outcome {
            Ok(()) => {
                tx.commit().await.map_err(DbError::from)?;
                info!("Password changed for '{}'", username);
                Ok(())
            }
            Err(e) => {
                rollback(tx, "change_password").await;
                Err(e)
            }
        }
    }
}
