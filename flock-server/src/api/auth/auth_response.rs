use flock_core::Account;

use serde::Serialize;

/// Response for successful registration and login: the public account fields
/// plus a fresh identity token. The credential hash never appears here.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub date_joined: i64,
    pub access_token: String,
}

impl AuthResponse {
    pub fn new(account: &Account, access_token: String) -> Self {
        Self {
            user_id: account.id.to_string(),
            username: account.username.clone(),
            email: account.email.clone(),
            bio: account.bio.clone(),
            date_joined: account.created_at.timestamp(),
            access_token,
        }
    }
}
