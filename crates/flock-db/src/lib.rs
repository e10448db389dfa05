pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::sqlite_pool::{create_pool, rollback};
pub use error::{DbError, Result};
pub use repositories::account_repository::AccountRepository;
pub use repositories::follow_repository::FollowRepository;
