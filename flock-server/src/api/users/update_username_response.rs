use serde::Serialize;

/// Response after a rename: the new name plus a token whose username claim
/// is current. Previously issued tokens stay valid; they bind to the id.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUsernameResponse {
    pub username: String,
    pub access_token: String,
}
