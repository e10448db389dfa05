//! Registration input.

use std::fmt;

/// Everything required to register an account.
///
/// `Debug` is hand-written so the raw password can never reach a log line.
#[derive(Clone)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub email: String,
    pub bio: Option<String>,
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .field("bio", &self.bio)
            .finish()
    }
}
