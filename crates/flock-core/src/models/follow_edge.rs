//! Directed follow relationship between two accounts.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A directed edge: follower -> followee.
///
/// Self-edges are rejected before they reach the store and again by a CHECK
/// constraint inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FollowEdge {
    pub follower_id: Uuid,
    pub followee_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl FollowEdge {
    /// Create a new edge with the current timestamp
    pub fn new(follower_id: Uuid, followee_id: Uuid) -> Self {
        Self {
            follower_id,
            followee_id,
            created_at: Utc::now(),
        }
    }
}
