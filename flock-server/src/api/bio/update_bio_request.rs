use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateBioRequest {
    /// Replacement bio text (required; the empty string is a valid bio)
    pub bio: String,
}
