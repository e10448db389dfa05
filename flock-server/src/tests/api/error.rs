use crate::ApiError;

use flock_core::CoreError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "bio too long".into(),
        field: Some("bio".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "bio too long");
    assert_eq!(json["error"]["field"], "bio");
}

#[tokio::test]
async fn test_validation_error_without_field_omits_the_key() {
    let error = ApiError::Validation {
        message: "bad input".into(),
        field: None,
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    let json = body_json(response).await;
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let error = ApiError::Conflict {
        message: "username 'alice' is already taken".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("already taken")
    );
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "no account named 'ghost'".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "no account named 'ghost'");
}

#[tokio::test]
async fn test_invalid_credentials_returns_401_with_fixed_message() {
    let response = ApiError::InvalidCredentials.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"]["message"], "Invalid username or password");
}

#[tokio::test]
async fn test_invalid_credentials_bodies_are_byte_identical() {
    // Unknown-username and wrong-password both surface as this variant;
    // nothing in the response may differ between the two.
    let first = ApiError::from(CoreError::invalid_credentials()).into_response();
    let second = ApiError::InvalidCredentials.into_response();

    assert_eq!(first.status(), second.status());

    let first_bytes = first.into_body().collect().await.unwrap().to_bytes();
    let second_bytes = second.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(first_bytes, second_bytes);
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let error = ApiError::Unauthorized {
        message: "missing authorization header".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let error = ApiError::Forbidden {
        message: "you can only edit your own bio".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_storage_unavailable_hides_internal_detail() {
    let error = ApiError::StorageUnavailable {
        message: "database is locked (code 5)".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "STORAGE_UNAVAILABLE");
    assert_eq!(json["error"]["message"], "Storage operation failed");
}

#[tokio::test]
async fn test_core_error_conversion_preserves_variant_and_field() {
    let core = CoreError::validation("username too short", Some("username"));
    let response = ApiError::from(core).into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "username");
}
