use crate::AccountDto;

use serde::Serialize;

/// Accounts the subject follows, ordered by username
#[derive(Debug, Serialize)]
pub struct FollowingResponse {
    pub following: Vec<AccountDto>,
}
