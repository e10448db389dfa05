use crate::AccountDto;

use serde::Serialize;

/// Search hits, ordered by username and capped by configuration
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub users: Vec<AccountDto>,
}
