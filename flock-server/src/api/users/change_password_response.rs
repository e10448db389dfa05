use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ChangePasswordResponse {
    pub username: String,
}
