use serde::Serialize;

/// Bio payload. `null` means the account has no bio, which is distinct from
/// an empty string.
#[derive(Debug, Serialize)]
pub struct BioResponse {
    pub bio: Option<String>,
}
