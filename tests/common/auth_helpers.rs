//! Authentication test helpers
//!
//! Sign up principals through the HTTP API and keep their tokens.

use axum::http::StatusCode;
use serde_json::json;

use super::server::TestApp;

/// A principal created through the signup endpoint
#[derive(Debug, Clone)]
pub struct TestPrincipal {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// `Bearer <token>` header value
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

async fn signup(app: &TestApp, kind: &str, name: &str, email: &str) -> TestPrincipal {
    let password = "password123";
    let response = app
        .post(
            &format!("/api/{kind}/signup"),
            None,
            json!({ "name": name, "email": email, "password": password }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "signup failed: {}", response.body);

    TestPrincipal {
        id: response.body["data"]["id"].as_str().expect("profile id").to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        token: response.body["token"].as_str().expect("token").to_string(),
    }
}

pub async fn signup_admin(app: &TestApp, email: &str) -> TestPrincipal {
    signup(app, "admin", "Test Admin", email).await
}

pub async fn signup_collaborator(app: &TestApp, email: &str) -> TestPrincipal {
    signup(app, "collaborator", "Test Collaborator", email).await
}

/// Create a workspace as `admin` and return its id
pub async fn create_workspace(app: &TestApp, admin: &TestPrincipal, name: &str, description: &str) -> String {
    let response = app
        .post(
            "/api/admin/create-workspace",
            Some(&admin.token),
            json!({ "name": name, "description": description }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "create-workspace failed: {}", response.body);
    response.body["data"]["id"].as_str().expect("workspace id").to_string()
}

/// Invite `collaborator` into `workspace_id` as `admin`
pub async fn invite(app: &TestApp, admin: &TestPrincipal, collaborator: &TestPrincipal, workspace_id: &str) {
    let response = app
        .post(
            "/api/admin/invite-collaborator",
            Some(&admin.token),
            json!({ "email": collaborator.email, "workspace_id": workspace_id }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "invite failed: {}", response.body);
}

/// Create a note and return its id
pub async fn create_note(
    app: &TestApp,
    collaborator: &TestPrincipal,
    workspace_id: &str,
    title: &str,
    tags: &str,
) -> String {
    let response = app
        .post(
            "/api/collaborator/create-notes",
            Some(&collaborator.token),
            json!({
                "title": title,
                "content": format!("{title} content"),
                "tags": tags,
                "workspace_id": workspace_id,
            }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "create-notes failed: {}", response.body);
    response.body["data"]["id"].as_str().expect("note id").to_string()
}
