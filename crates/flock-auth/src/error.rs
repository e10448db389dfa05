use flock_core::CoreError;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

/// Credential-mechanics failures collapse into the shared taxonomy here.
/// Token problems map to `Unauthorized` with coarse messages; hashing and
/// signing failures map to `StorageUnavailable`.
impl From<AuthError> for CoreError {
    #[track_caller]
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingHeader { .. } => {
                CoreError::unauthorized("missing authorization header")
            }
            AuthError::InvalidScheme { .. } => {
                CoreError::unauthorized("invalid authorization scheme: expected 'Bearer'")
            }
            AuthError::TokenExpired { .. } => CoreError::unauthorized("token expired"),
            AuthError::InvalidToken { .. }
            | AuthError::JwtDecode { .. }
            | AuthError::InvalidClaim { .. } => CoreError::unauthorized("invalid token"),
            AuthError::JwtEncode { .. } | AuthError::PasswordHash { .. } => {
                CoreError::storage_unavailable("credential processing failed")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
