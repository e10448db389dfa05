pub mod account;
pub mod account_summary;
pub mod follow_edge;
pub mod new_account;
