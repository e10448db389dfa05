/// Limits for graph operations, supplied by server configuration.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Maximum bio length in characters
    pub max_bio_length: usize,
    /// Cap on username search results
    pub max_search_results: i64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_bio_length: 1000,
            max_search_results: 50,
        }
    }
}
