//! REST API handlers, request/response types, and extractors

pub mod account_dto;
pub mod auth;
pub mod bio;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod follows;
pub mod search;
pub mod users;
