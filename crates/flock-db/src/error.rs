use flock_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated: {constraint} {location}")]
    UniqueViolation {
        constraint: String,
        location: ErrorLocation,
    },

    #[error("Foreign key constraint violated: {constraint} {location}")]
    ForeignKeyViolation {
        constraint: String,
        location: ErrorLocation,
    },

    #[error("Check constraint violated: {constraint} {location}")]
    CheckViolation {
        constraint: String,
        location: ErrorLocation,
    },

    #[error("Row decode failed: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },
}

/// Constraint violations are split out of the generic SQLx bucket so the
/// components can treat a lost check-then-write race as a typed outcome
/// instead of a crash.
impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if let sqlx::Error::Database(db_err) = &source {
            if db_err.is_unique_violation() {
                return Self::UniqueViolation {
                    constraint: db_err.message().to_string(),
                    location,
                };
            }
            if db_err.is_foreign_key_violation() {
                return Self::ForeignKeyViolation {
                    constraint: db_err.message().to_string(),
                    location,
                };
            }
            if db_err.is_check_violation() {
                return Self::CheckViolation {
                    constraint: db_err.message().to_string(),
                    location,
                };
            }
        }

        Self::Sqlx { source, location }
    }
}

impl From<DbError> for CoreError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation { constraint, .. } => {
                CoreError::conflict(conflict_message(&constraint))
            }
            DbError::ForeignKeyViolation { .. } => {
                CoreError::not_found("referenced account does not exist")
            }
            DbError::CheckViolation { .. } => {
                CoreError::validation("request violates a data constraint", None)
            }
            DbError::Sqlx { .. }
            | DbError::Decode { .. }
            | DbError::Migration { .. }
            | DbError::Initialization { .. } => {
                CoreError::storage_unavailable("database operation failed")
            }
        }
    }
}

/// Translate SQLite's constraint message into what a client should see.
/// SQLite reports unique violations as "UNIQUE constraint failed: <table>.<column>".
fn conflict_message(constraint: &str) -> &'static str {
    if constraint.contains("accounts.username") {
        "username already taken"
    } else if constraint.contains("accounts.email") {
        "email already registered"
    } else if constraint.contains("follows.") {
        "already following this account"
    } else {
        "resource already exists"
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
