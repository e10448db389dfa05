#![allow(dead_code)]

//! Test infrastructure for flock-server API tests

use flock_auth::{JwtValidator, TokenIssuer};
use flock_graph::{GraphConfig, GraphService};
use flock_identity::IdentityService;
use flock_server::AppState;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

/// 32 bytes, the configured minimum
pub const TEST_JWT_SECRET: &[u8] = b"integration-test-secret-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    // One connection so every request sees the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/flock-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState with default limits
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_config(GraphConfig::default()).await
}

/// Create AppState with explicit graph limits
pub async fn create_test_app_state_with_config(graph_config: GraphConfig) -> AppState {
    let pool = create_test_pool().await;
    let issuer = TokenIssuer::with_hs256(TEST_JWT_SECRET, 3600);
    let validator = JwtValidator::with_hs256(TEST_JWT_SECRET);
    let identity = Arc::new(IdentityService::new(
        pool.clone(),
        issuer,
        validator,
        graph_config.max_bio_length,
    ));
    let graph = Arc::new(GraphService::new(pool.clone(), graph_config));

    AppState {
        pool,
        identity,
        graph,
    }
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn bare_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn authed_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub fn authed_json_request(method: &str, uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn response_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Register `username` through the API and return (user id, access token).
/// Password is `password-for-{username}`, email `{username}@example.com`.
pub async fn register(app: &Router, username: &str) -> (String, String) {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/register",
            json!({
                "username": username,
                "password": format!("password-for-{}", username),
                "email": format!("{}@example.com", username),
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = response_json(response).await;
    (
        json["userId"].as_str().unwrap().to_string(),
        json["accessToken"].as_str().unwrap().to_string(),
    )
}

/// Log in through the API and return the response for the caller to inspect
pub async fn login(app: &Router, username: &str, password: &str) -> Response {
    app.clone()
        .oneshot(json_request(
            "POST",
            "/api/login",
            json!({ "username": username, "password": password }),
        ))
        .await
        .unwrap()
}
