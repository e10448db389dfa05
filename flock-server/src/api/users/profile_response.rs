use crate::AccountDto;

use serde::Serialize;

/// Single public profile response
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: AccountDto,
}
