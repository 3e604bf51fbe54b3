//! Note lifecycle API integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::*;

struct Team {
    app: TestApp,
    member: TestPrincipal,
    outsider: TestPrincipal,
    workspace_id: String,
}

async fn team() -> Team {
    let app = TestApp::new();
    let admin = signup_admin(&app, "owner@example.com").await;
    let member = signup_collaborator(&app, "member@example.com").await;
    let outsider = signup_collaborator(&app, "outsider@example.com").await;
    let workspace_id = create_workspace(&app, &admin, "Team", "Shared notes").await;
    invite(&app, &admin, &member, &workspace_id).await;
    Team {
        app,
        member,
        outsider,
        workspace_id,
    }
}

#[tokio::test]
async fn test_create_note_returns_created() {
    let t = team().await;

    let response = t
        .app
        .post(
            "/api/collaborator/create-notes",
            Some(&t.member.token),
            json!({
                "title": "Kickoff",
                "content": "Agenda",
                "tags": " Planning , ,meeting",
                "workspace_id": t.workspace_id,
            }),
        )
        .await;

    let body = assert_envelope!(response, StatusCode::CREATED, "Note created successfully");
    assert_eq!(body["data"]["title"], "Kickoff");
    assert_eq!(body["data"]["tags"], json!(["Planning", "meeting"]));
    assert_eq!(body["data"]["author"], t.member.id.as_str());
    assert_eq!(body["data"]["created_at"], body["data"]["updated_at"]);
}

#[tokio::test]
async fn test_create_note_requires_membership() {
    let t = team().await;

    let response = t
        .app
        .post(
            "/api/collaborator/create-notes",
            Some(&t.outsider.token),
            json!({ "title": "x", "content": "y", "workspace_id": t.workspace_id }),
        )
        .await;

    assert_envelope!(
        response,
        StatusCode::UNAUTHORIZED,
        "You are not a member of this workspace"
    );
}

#[tokio::test]
async fn test_create_note_unknown_workspace() {
    let t = team().await;

    let response = t
        .app
        .post(
            "/api/collaborator/create-notes",
            Some(&t.member.token),
            json!({ "title": "x", "content": "y", "workspace_id": uuid::Uuid::new_v4().to_string() }),
        )
        .await;

    assert_envelope!(response, StatusCode::NOT_FOUND, "Workspace not found");
}

#[tokio::test]
async fn test_edit_note_by_returned_id() {
    let t = team().await;
    let note_id = create_note(&t.app, &t.member, &t.workspace_id, "Draft", "a").await;

    let response = t
        .app
        .put(
            "/api/collaborator/edit-notes",
            Some(&t.member.token),
            json!({
                "workspace_id": t.workspace_id,
                "note_id": note_id,
                "title": "Final",
                "content": "Done",
                "tags": "b,c",
            }),
        )
        .await;

    let body = assert_envelope!(response, StatusCode::OK, "Note updated successfully");
    assert_eq!(body["data"]["id"], note_id.as_str());
    assert_eq!(body["data"]["title"], "Final");
    assert_eq!(body["data"]["tags"], json!(["b", "c"]));
    assert_eq!(body["data"]["author"], t.member.id.as_str());

    let listed = t
        .app
        .get(
            &format!("/api/collaborator/all-notes?workspace_id={}", t.workspace_id),
            Some(&t.member.token),
        )
        .await;
    let body = assert_status!(listed, StatusCode::OK);
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"][0]["content"], "Done");
}

#[tokio::test]
async fn test_edit_note_errors() {
    let t = team().await;
    create_note(&t.app, &t.member, &t.workspace_id, "Draft", "").await;

    let unknown_note = t
        .app
        .put(
            "/api/collaborator/edit-notes",
            Some(&t.member.token),
            json!({
                "workspace_id": t.workspace_id,
                "note_id": uuid::Uuid::new_v4().to_string(),
                "title": "t",
                "content": "c",
            }),
        )
        .await;
    assert_envelope!(unknown_note, StatusCode::NOT_FOUND, "Note not found in this workspace");

    let missing_fields = t
        .app
        .put(
            "/api/collaborator/edit-notes",
            Some(&t.member.token),
            json!({ "workspace_id": t.workspace_id, "title": "t" }),
        )
        .await;
    assert_envelope!(
        missing_fields,
        StatusCode::BAD_REQUEST,
        "Note ID, title, and content are required"
    );

    let outsider = t
        .app
        .put(
            "/api/collaborator/edit-notes",
            Some(&t.outsider.token),
            json!({
                "workspace_id": t.workspace_id,
                "note_id": uuid::Uuid::new_v4().to_string(),
                "title": "t",
                "content": "c",
            }),
        )
        .await;
    assert_status!(outsider, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_all_notes_in_insertion_order() {
    let t = team().await;
    for title in ["one", "two", "three"] {
        create_note(&t.app, &t.member, &t.workspace_id, title, "").await;
    }

    let response = t
        .app
        .get(
            &format!("/api/collaborator/all-notes?workspace_id={}", t.workspace_id),
            Some(&t.member.token),
        )
        .await;

    let body = assert_envelope!(response, StatusCode::OK, "Notes retrieved successfully");
    let titles: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_all_notes_requires_workspace_id() {
    let t = team().await;

    let response = t.app.get("/api/collaborator/all-notes", Some(&t.member.token)).await;

    assert_envelope!(response, StatusCode::BAD_REQUEST, "Workspace ID is required");
}

#[tokio::test]
async fn test_all_notes_for_non_member() {
    let t = team().await;

    let response = t
        .app
        .get(
            &format!("/api/collaborator/all-notes?workspace_id={}", t.workspace_id),
            Some(&t.outsider.token),
        )
        .await;

    assert_status!(response, StatusCode::UNAUTHORIZED);
}
