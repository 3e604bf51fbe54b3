//! Authentication API integration tests
//!
//! Signup, login, profile retrieval and token scoping for both
//! principal kinds.

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use collabnotes::backend::auth::TokenService;
use collabnotes::shared::PrincipalKind;

use crate::common::*;

#[tokio::test]
async fn test_admin_signup_returns_token_and_profile() {
    let app = TestApp::new();

    let response = app
        .post(
            "/api/admin/signup",
            None,
            json!({ "name": "Ada", "email": "ada@example.com", "password": "secret" }),
        )
        .await;

    let body = assert_envelope!(response, StatusCode::OK, "Signup successful");
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["data"]["name"], "Ada");
    assert_eq!(body["data"]["email"], "ada@example.com");
    assert!(body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_signup_duplicate_email_conflicts() {
    let app = TestApp::new();
    signup_collaborator(&app, "dup@example.com").await;

    let response = app
        .post(
            "/api/collaborator/signup",
            None,
            json!({ "name": "Again", "email": "dup@example.com", "password": "other" }),
        )
        .await;

    assert_envelope!(response, StatusCode::BAD_REQUEST, "Email already exists");
}

#[tokio::test]
async fn test_same_email_allowed_across_kinds() {
    let app = TestApp::new();
    let admin = signup_admin(&app, "shared@example.com").await;
    let collaborator = signup_collaborator(&app, "shared@example.com").await;

    assert_ne!(admin.id, collaborator.id);
}

#[tokio::test]
async fn test_signup_missing_fields() {
    let app = TestApp::new();

    let response = app
        .post("/api/admin/signup", None, json!({ "name": "NoMail", "password": "x" }))
        .await;

    assert_envelope!(
        response,
        StatusCode::BAD_REQUEST,
        "Name, email, and password are required"
    );
}

#[tokio::test]
async fn test_login_success_and_failure() {
    let app = TestApp::new();
    let admin = signup_admin(&app, "login@example.com").await;

    let ok = app
        .post(
            "/api/admin/login",
            None,
            json!({ "email": admin.email, "password": admin.password }),
        )
        .await;
    let body = assert_envelope!(ok, StatusCode::OK, "Login successful");
    assert_eq!(body["data"]["id"], admin.id.as_str());

    let wrong_password = app
        .post(
            "/api/admin/login",
            None,
            json!({ "email": admin.email, "password": "nope" }),
        )
        .await;
    assert_envelope!(wrong_password, StatusCode::UNAUTHORIZED, "Invalid credentials");

    let unknown = app
        .post(
            "/api/admin/login",
            None,
            json!({ "email": "ghost@example.com", "password": "nope" }),
        )
        .await;
    assert_envelope!(unknown, StatusCode::UNAUTHORIZED, "Invalid credentials");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::new();

    let response = app
        .post("/api/collaborator/login", None, json!({ "email": "a@example.com" }))
        .await;

    assert_envelope!(response, StatusCode::BAD_REQUEST, "Email and password required");
}

#[tokio::test]
async fn test_me_returns_profile() {
    let app = TestApp::new();
    let collaborator = signup_collaborator(&app, "me@example.com").await;

    let response = app.get("/api/collaborator/me", Some(&collaborator.token)).await;

    let body = assert_envelope!(response, StatusCode::OK, "Profile retrieved successfully");
    assert_eq!(body["data"]["email"], "me@example.com");
}

#[tokio::test]
async fn test_me_accepts_bare_token() {
    let app = TestApp::new();
    let admin = signup_admin(&app, "bare@example.com").await;

    let response = app
        .send(Method::GET, "/api/admin/me", Some(&admin.token), None)
        .await;

    assert_status!(response, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_token_rejected() {
    let app = TestApp::new();

    let response = app.get("/api/admin/me", None).await;

    assert_envelope!(response, StatusCode::UNAUTHORIZED, "Token is missing");
}

#[tokio::test]
async fn test_empty_bearer_rejected_as_missing() {
    let app = TestApp::new();

    let response = app
        .send(Method::GET, "/api/admin/me", Some("Bearer "), None)
        .await;

    assert_envelope!(response, StatusCode::UNAUTHORIZED, "Token is missing");
}

#[tokio::test]
async fn test_token_of_other_kind_rejected() {
    let app = TestApp::new();
    let collaborator = signup_collaborator(&app, "kind@example.com").await;

    let response = app.get("/api/admin/me", Some(&collaborator.token)).await;

    assert_envelope!(response, StatusCode::UNAUTHORIZED, "Invalid or expired token");
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::new();
    let admin = signup_admin(&app, "expired@example.com").await;
    let expired = TokenService::new(TEST_SECRET, -2)
        .issue(PrincipalKind::Admin, admin.id.parse().unwrap(), &admin.email)
        .unwrap();

    let response = app.get("/api/admin/me", Some(&expired)).await;

    assert_envelope!(response, StatusCode::UNAUTHORIZED, "Invalid or expired token");
}

#[tokio::test]
async fn test_token_for_unknown_principal_not_found() {
    let app = TestApp::new();
    let token = app
        .state
        .tokens
        .issue(PrincipalKind::Collaborator, Uuid::new_v4(), "ghost@example.com")
        .unwrap();

    let response = app.get("/api/collaborator/me", Some(&token)).await;

    assert_envelope!(response, StatusCode::NOT_FOUND, "Collaborator not found");
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = TestApp::new();

    let response = app.get("/api/collaborator/me", Some("not.a.jwt")).await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
}
