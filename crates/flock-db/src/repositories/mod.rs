pub mod account_repository;
pub mod follow_repository;
