//! Workspace and invitation API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

#[tokio::test]
async fn test_create_workspace() {
    let app = TestApp::new();
    let admin = signup_admin(&app, "owner@example.com").await;

    let response = app
        .post(
            "/api/admin/create-workspace",
            Some(&admin.token),
            json!({ "name": "Research", "description": "Papers and drafts" }),
        )
        .await;

    let body = assert_envelope!(response, StatusCode::OK, "Workspace created successfully");
    assert_eq!(body["data"]["name"], "Research");
    assert_eq!(body["data"]["created_by"], admin.id.as_str());
    assert_eq!(body["data"]["notes"], json!([]));
    assert_eq!(body["data"]["collaborators"], json!([]));
}

#[tokio::test]
async fn test_create_workspace_requires_fields() {
    let app = TestApp::new();
    let admin = signup_admin(&app, "owner@example.com").await;

    let response = app
        .post(
            "/api/admin/create-workspace",
            Some(&admin.token),
            json!({ "name": "   " }),
        )
        .await;

    assert_envelope!(
        response,
        StatusCode::BAD_REQUEST,
        "Name and description are required"
    );
}

#[tokio::test]
async fn test_collaborator_cannot_create_workspace() {
    let app = TestApp::new();
    let collaborator = signup_collaborator(&app, "c@example.com").await;

    let response = app
        .post(
            "/api/admin/create-workspace",
            Some(&collaborator.token),
            json!({ "name": "Nope", "description": "Nope" }),
        )
        .await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invite_links_both_sides_and_logs_invitation() {
    let app = TestApp::new();
    let admin = signup_admin(&app, "owner@example.com").await;
    let collaborator = signup_collaborator(&app, "member@example.com").await;
    let workspace_id = create_workspace(&app, &admin, "Team", "Shared").await;

    let response = app
        .post(
            "/api/admin/invite-collaborator",
            Some(&admin.token),
            json!({ "email": collaborator.email, "workspace_id": workspace_id }),
        )
        .await;
    let body = assert_envelope!(response, StatusCode::OK, "Collaborator invited successfully");
    assert!(body.get("data").is_none());

    let workspaces = app
        .get("/api/collaborator/all-workspaces", Some(&collaborator.token))
        .await;
    let body = assert_envelope!(workspaces, StatusCode::OK, "Workspaces retrieved successfully");
    assert_eq!(body["data"][0]["id"], workspace_id.as_str());
    assert_eq!(body["data"][0]["collaborators"], json!([collaborator.id]));

    let invitations = app.get("/api/admin/invitations", Some(&admin.token)).await;
    let body = assert_envelope!(invitations, StatusCode::OK, "Invitations retrieved successfully");
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"][0]["email"], "member@example.com");
    assert_eq!(body["data"][0]["workspace_id"], workspace_id.as_str());
}

#[tokio::test]
async fn test_invite_twice_is_idempotent() {
    let app = TestApp::new();
    let admin = signup_admin(&app, "owner@example.com").await;
    let collaborator = signup_collaborator(&app, "member@example.com").await;
    let workspace_id = create_workspace(&app, &admin, "Team", "Shared").await;

    invite(&app, &admin, &collaborator, &workspace_id).await;
    invite(&app, &admin, &collaborator, &workspace_id).await;

    let workspaces = app
        .get("/api/collaborator/all-workspaces", Some(&collaborator.token))
        .await;
    let body = assert_status!(workspaces, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"][0]["collaborators"], json!([collaborator.id]));

    let invitations = app.get("/api/admin/invitations", Some(&admin.token)).await;
    let body = assert_status!(invitations, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_invite_unknown_targets() {
    let app = TestApp::new();
    let admin = signup_admin(&app, "owner@example.com").await;
    let collaborator = signup_collaborator(&app, "member@example.com").await;
    let workspace_id = create_workspace(&app, &admin, "Team", "Shared").await;

    let unknown_email = app
        .post(
            "/api/admin/invite-collaborator",
            Some(&admin.token),
            json!({ "email": "nobody@example.com", "workspace_id": workspace_id }),
        )
        .await;
    assert_envelope!(unknown_email, StatusCode::NOT_FOUND, "Collaborator not found");

    let unknown_workspace = app
        .post(
            "/api/admin/invite-collaborator",
            Some(&admin.token),
            json!({ "email": collaborator.email, "workspace_id": uuid::Uuid::new_v4().to_string() }),
        )
        .await;
    assert_envelope!(unknown_workspace, StatusCode::NOT_FOUND, "Workspace not found");

    let malformed = app
        .post(
            "/api/admin/invite-collaborator",
            Some(&admin.token),
            json!({ "email": collaborator.email, "workspace_id": "not-a-uuid" }),
        )
        .await;
    assert_envelope!(malformed, StatusCode::NOT_FOUND, "Workspace not found");
}

#[tokio::test]
async fn test_invite_requires_fields() {
    let app = TestApp::new();
    let admin = signup_admin(&app, "owner@example.com").await;

    let response = app
        .post(
            "/api/admin/invite-collaborator",
            Some(&admin.token),
            json!({ "email": "member@example.com" }),
        )
        .await;

    assert_envelope!(
        response,
        StatusCode::BAD_REQUEST,
        "Email and workspace ID are required"
    );
}

#[tokio::test]
async fn test_all_workspaces_empty_for_new_collaborator() {
    let app = TestApp::new();
    let collaborator = signup_collaborator(&app, "fresh@example.com").await;

    let response = app
        .get("/api/collaborator/all-workspaces", Some(&collaborator.token))
        .await;

    let body = assert_status!(response, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}
