//! Verified identity of a requesting account.

use uuid::Uuid;

/// Produced by token validation; carries everything authorization needs.
///
/// The username is the one bound at issuance and may be stale after a
/// rename, so ownership checks must compare account ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub account_id: Uuid,
    pub username: String,
}
