//! Health check, fallback and request body handling

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/api/health", None).await;

    assert_envelope!(response, StatusCode::OK, "Backend Running Successfully!!!");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new();

    let response = app.get("/api/does-not-exist", None).await;
    assert_envelope!(response, StatusCode::NOT_FOUND, "Route not found");

    let response = app.get("/api/admin/does-not-exist", None).await;
    assert_envelope!(response, StatusCode::NOT_FOUND, "Route not found");
}

#[tokio::test]
async fn test_malformed_json_body() {
    let app = TestApp::new();
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/api/admin/signup")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = tower::ServiceExt::oneshot(app.router.clone(), request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_envelope_shape() {
    let app = TestApp::new();

    let response = app
        .send(
            Method::POST,
            "/api/collaborator/login",
            None,
            Some(json!({ "email": "x@example.com", "password": "y" })),
        )
        .await;

    let body = assert_status!(response, StatusCode::UNAUTHORIZED);
    assert!(body["message"].is_string());
    assert!(body.get("data").is_none());
    assert_contains!(body["message"].as_str().unwrap(), "credentials");
}
