pub mod caller;
pub mod identity_service;

pub use caller::Caller;
pub use identity_service::IdentityService;
