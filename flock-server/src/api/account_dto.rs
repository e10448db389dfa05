use flock_core::AccountSummary;

use serde::Serialize;

/// Public account fields for JSON serialization
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub date_joined: i64,
}

impl From<AccountSummary> for AccountDto {
    fn from(a: AccountSummary) -> Self {
        Self {
            user_id: a.id.to_string(),
            username: a.username,
            email: a.email,
            bio: a.bio,
            date_joined: a.created_at.timestamp(),
        }
    }
}
