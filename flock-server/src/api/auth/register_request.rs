use std::fmt;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    /// Desired username (required)
    pub username: String,

    /// Plaintext password, hashed before it ever reaches the store (required)
    pub password: String,

    /// Email address (required)
    pub email: String,

    /// Optional initial bio
    #[serde(default)]
    pub bio: Option<String>,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .field("bio", &self.bio)
            .finish()
    }
}
