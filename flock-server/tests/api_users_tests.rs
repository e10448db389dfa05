//! Integration tests for profile reads, renames, password changes, and
//! account deletion

mod common;

use crate::common::{
    authed_json_request, authed_request, bare_request, create_test_app_state, json_request, login,
    register, response_json,
};

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use flock_server::build_router;

#[tokio::test]
async fn test_get_profile_is_public_and_has_only_public_fields() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let (user_id, token) = register(&app, "alice").await;

    let set_bio = app
        .clone()
        .oneshot(authed_json_request(
            "PUT",
            "/api/users/alice/bio",
            &token,
            json!({ "bio": "resident bird" }),
        ))
        .await
        .unwrap();
    assert_eq!(set_bio.status(), StatusCode::OK);

    // No authorization header on the read
    let response = app
        .oneshot(bare_request("GET", "/api/users/alice"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["user"]["userId"], user_id);
    assert_eq!(json["user"]["username"], "alice");
    assert_eq!(json["user"]["email"], "alice@example.com");
    assert_eq!(json["user"]["bio"], "resident bird");

    let keys: Vec<&str> = json["user"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["bio", "dateJoined", "email", "userId", "username"]);
}

#[tokio::test]
async fn test_get_profile_unknown_user_not_found() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = app
        .oneshot(bare_request("GET", "/api/users/ghost"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = response_json(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_change_username_moves_profile_and_returns_fresh_token() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let (user_id, token) = register(&app, "alice").await;

    let response = app
        .clone()
        .oneshot(authed_json_request(
            "PUT",
            "/api/users/alice/username",
            &token,
            json!({ "newUsername": "wonderland" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["username"], "wonderland");
    assert!(!json["accessToken"].as_str().unwrap().is_empty());

    // The old name is gone, the new one resolves to the same account
    let old = app
        .clone()
        .oneshot(bare_request("GET", "/api/users/alice"))
        .await
        .unwrap();
    assert_eq!(old.status(), StatusCode::NOT_FOUND);

    let new = app
        .oneshot(bare_request("GET", "/api/users/wonderland"))
        .await
        .unwrap();
    assert_eq!(new.status(), StatusCode::OK);
    let json = response_json(new).await;
    assert_eq!(json["user"]["userId"], user_id);
}

#[tokio::test]
async fn test_tokens_issued_before_rename_still_authorize() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let (_, original_token) = register(&app, "alice").await;

    let rename = app
        .clone()
        .oneshot(authed_json_request(
            "PUT",
            "/api/users/alice/username",
            &original_token,
            json!({ "newUsername": "wonderland" }),
        ))
        .await
        .unwrap();
    assert_eq!(rename.status(), StatusCode::OK);

    // Tokens bind to the account id, not the name
    let response = app
        .oneshot(authed_json_request(
            "PUT",
            "/api/users/wonderland/bio",
            &original_token,
            json!({ "bio": "still me" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_change_username_to_taken_name_conflict() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let (_, token) = register(&app, "alice").await;
    register(&app, "bob").await;

    let response = app
        .oneshot(authed_json_request(
            "PUT",
            "/api/users/alice/username",
            &token,
            json!({ "newUsername": "bob" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_change_username_of_another_account_forbidden() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    register(&app, "alice").await;
    let (_, bob_token) = register(&app, "bob").await;

    let response = app
        .clone()
        .oneshot(authed_json_request(
            "PUT",
            "/api/users/alice/username",
            &bob_token,
            json!({ "newUsername": "hijacked" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = response_json(response).await;
    assert_eq!(json["error"]["code"], "FORBIDDEN");

    // Alice is untouched
    let profile = app
        .oneshot(bare_request("GET", "/api/users/alice"))
        .await
        .unwrap();
    assert_eq!(profile.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_change_username_requires_bearer_token() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    register(&app, "alice").await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/users/alice/username",
            json!({ "newUsername": "wonderland" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = response_json(response).await;
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_change_password_rotates_the_credential() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let (_, token) = register(&app, "alice").await;

    let response = app
        .clone()
        .oneshot(authed_json_request(
            "PUT",
            "/api/users/alice/changePassword",
            &token,
            json!({ "newPassword": "an entirely new secret" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["username"], "alice");

    let stale = login(&app, "alice", "password-for-alice").await;
    assert_eq!(stale.status(), StatusCode::UNAUTHORIZED);

    let fresh = login(&app, "alice", "an entirely new secret").await;
    assert_eq!(fresh.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_change_password_of_another_account_forbidden() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    register(&app, "alice").await;
    let (_, bob_token) = register(&app, "bob").await;

    let response = app
        .clone()
        .oneshot(authed_json_request(
            "PUT",
            "/api/users/alice/changePassword",
            &bob_token,
            json!({ "newPassword": "bob was here bob was here" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Alice's original password still works
    let original = login(&app, "alice", "password-for-alice").await;
    assert_eq!(original.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_account_removes_the_profile() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let (_, token) = register(&app, "alice").await;

    let response = app
        .clone()
        .oneshot(authed_request("DELETE", "/api/users/alice", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert!(json["message"].as_str().unwrap().contains("alice"));

    let profile = app
        .clone()
        .oneshot(bare_request("GET", "/api/users/alice"))
        .await
        .unwrap();
    assert_eq!(profile.status(), StatusCode::NOT_FOUND);

    let stale_login = login(&app, "alice", "password-for-alice").await;
    assert_eq!(stale_login.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_account_of_another_account_forbidden() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    register(&app, "alice").await;
    let (_, bob_token) = register(&app, "bob").await;

    let response = app
        .clone()
        .oneshot(authed_request("DELETE", "/api/users/alice", &bob_token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let profile = app
        .oneshot(bare_request("GET", "/api/users/alice"))
        .await
        .unwrap();
    assert_eq!(profile.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_requests_for_deleted_account_fail_not_found() {
    let state = create_test_app_state().await;
    let app = build_router(state);
    let (_, token) = register(&app, "alice").await;

    let delete = app
        .clone()
        .oneshot(authed_request("DELETE", "/api/users/alice", &token))
        .await
        .unwrap();
    assert_eq!(delete.status(), StatusCode::OK);

    // The token still validates cryptographically but the account is gone
    let response = app
        .oneshot(authed_json_request(
            "PUT",
            "/api/users/alice/bio",
            &token,
            json!({ "bio": "ghost" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
