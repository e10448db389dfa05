pub mod change_password_request;
pub mod change_password_response;
pub mod profile_response;
pub mod update_username_request;
pub mod update_username_response;
pub mod users;
