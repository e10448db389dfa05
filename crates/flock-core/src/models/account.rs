//! Account entity - a registered user with credentials and profile fields.

use crate::AccountSummary;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered account.
///
/// Deliberately has no serde derives: the credential hash must never cross a
/// serialization boundary, so transport-facing shapes are built from
/// [`AccountSummary`] or dedicated DTOs instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub username: String,
    /// Argon2 PHC string, never the raw password
    pub password_hash: String,
    pub email: String,
    /// Absent and empty string are distinct states
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a fresh id and creation timestamp
    pub fn new(username: String, password_hash: String, email: String, bio: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            email,
            bio,
            created_at: Utc::now(),
        }
    }

    /// Public projection of this account
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            bio: self.bio.clone(),
            created_at: self.created_at,
        }
    }
}
