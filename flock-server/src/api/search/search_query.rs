use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Username fragment. A missing parameter behaves like an empty query
    /// and is rejected by validation.
    #[serde(default)]
    pub q: String,
}
