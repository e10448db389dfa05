pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::account::Account;
pub use models::account_summary::AccountSummary;
pub use models::follow_edge::FollowEdge;
pub use models::new_account::NewAccount;

#[cfg(test)]
mod tests;
