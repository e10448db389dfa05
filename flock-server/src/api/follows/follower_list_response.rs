use crate::AccountDto;

use serde::Serialize;

/// Accounts that follow the subject, ordered by username
#[derive(Debug, Serialize)]
pub struct FollowerListResponse {
    pub followers: Vec<AccountDto>,
}
