//! Axum extractor for bearer-token authentication

use crate::ApiError;
use crate::state::AppState;

use flock_auth::AuthError;
use flock_identity::Caller;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use error_location::ErrorLocation;

/// Resolved identity of the requesting account.
///
/// Reads the `Authorization: Bearer <token>` header and validates the token
/// signature and expiry. Any failure rejects the request with 401 before the
/// handler runs. Ownership of the addressed resource is NOT checked here;
/// the services compare the caller to the path account by id.
pub struct CallerIdentity(pub Caller);

impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Some(header_value) = parts.headers.get(AUTHORIZATION) else {
                return Err(AuthError::MissingHeader {
                    location: ErrorLocation::from(Location::caller()),
                }
                .into());
            };

            let Ok(header) = header_value.to_str() else {
                return Err(AuthError::InvalidToken {
                    message: "authorization header is not valid UTF-8".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
                .into());
            };

            let Some(token) = header.strip_prefix("Bearer ") else {
                return Err(AuthError::InvalidScheme {
                    location: ErrorLocation::from(Location::caller()),
                }
                .into());
            };

            let caller = state.identity.resolve_caller(token)?;
            log::debug!("Authenticated caller '{}'", caller.username);

            Ok(CallerIdentity(caller))
        }
    }
}
