use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Bounds for the configurable limits themselves
pub const MIN_MAX_BIO_LENGTH: usize = 1;
pub const MAX_MAX_BIO_LENGTH: usize = 100_000;
pub const DEFAULT_MAX_BIO_LENGTH: usize = 1000;

pub const MIN_MAX_SEARCH_RESULTS: i64 = 1;
pub const MAX_MAX_SEARCH_RESULTS: i64 = 500;
pub const DEFAULT_MAX_SEARCH_RESULTS: i64 = 50;

/// Operator-tunable input limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length for account bios, in characters
    pub max_bio_length: usize,
    /// Maximum number of accounts a username search returns
    pub max_search_results: i64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_bio_length: DEFAULT_MAX_BIO_LENGTH,
            max_search_results: DEFAULT_MAX_SEARCH_RESULTS,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_bio_length < MIN_MAX_BIO_LENGTH || self.max_bio_length > MAX_MAX_BIO_LENGTH {
            return Err(ConfigError::config(format!(
                "validation.max_bio_length must be {}-{}, got {}",
                MIN_MAX_BIO_LENGTH, MAX_MAX_BIO_LENGTH, self.max_bio_length
            )));
        }

        if self.max_search_results < MIN_MAX_SEARCH_RESULTS
            || self.max_search_results > MAX_MAX_SEARCH_RESULTS
        {
            return Err(ConfigError::config(format!(
                "validation.max_search_results must be {}-{}, got {}",
                MIN_MAX_SEARCH_RESULTS, MAX_MAX_SEARCH_RESULTS, self.max_search_results
            )));
        }

        Ok(())
    }
}
