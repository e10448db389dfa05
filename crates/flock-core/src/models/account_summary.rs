//! Public projection of an account - every profile field except the credential hash.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// What other users are allowed to see about an account. Returned by profile
/// lookups, follower/following listings, and username search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}
