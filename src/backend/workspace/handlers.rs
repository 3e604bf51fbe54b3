/**
 * Workspace and Note Handlers
 *
 * Admin side: create-workspace, invite-collaborator, invitations.
 * Collaborator side: create-notes, edit-notes, all-notes, all-workspaces.
 *
 * All handlers run behind the auth middleware of their principal kind and
 * read the caller from [`AuthPrincipal`].
 */

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use super::membership;
use super::notes::{self, NoteDraft};
use super::types::*;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthPrincipal;
use crate::backend::server::AppState;
use crate::backend::validation::{present, require_all};
use crate::shared::{parse_tags, ApiResponse};

/// Parse an id from a request; malformed ids are reported like unknown ones
fn parse_id(raw: &str, not_found: &'static str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        tracing::warn!("Malformed id in request: {:?}", raw);
        BackendError::not_found(not_found)
    })
}

fn tags_of(raw: &Option<String>) -> Vec<String> {
    raw.as_deref().map(parse_tags).unwrap_or_default()
}

/// POST /api/admin/create-workspace
///
/// # Errors
///
/// * `400 Bad Request` - Name or description missing
pub async fn create_workspace(
    State(state): State<AppState>,
    AuthPrincipal(admin): AuthPrincipal,
    payload: Result<Json<CreateWorkspaceRequest>, JsonRejection>,
) -> Result<Json<WorkspaceResponse>, BackendError> {
    let Json(request) = payload?;
    let [name, description] = require_all(
        [&request.name, &request.description],
        "Name and description are required",
    )?;

    let workspace = membership::create_workspace(state.workspaces.as_ref(), admin.id, name, description).await?;

    Ok(Json(ApiResponse::with_data(200, "Workspace created successfully", workspace)))
}

/// POST /api/admin/invite-collaborator
///
/// # Errors
///
/// * `400 Bad Request` - Email or workspace id missing
/// * `404 Not Found` - Unknown workspace or collaborator
pub async fn invite_collaborator(
    State(state): State<AppState>,
    AuthPrincipal(admin): AuthPrincipal,
    payload: Result<Json<InviteRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<()>>, BackendError> {
    let Json(request) = payload?;
    let [email, workspace_id] = require_all(
        [&request.email, &request.workspace_id],
        "Email and workspace ID are required",
    )?;
    let workspace_id = parse_id(workspace_id, "Workspace not found")?;

    membership::invite(
        state.identity.as_ref(),
        state.workspaces.as_ref(),
        admin.id,
        email,
        workspace_id,
    )
    .await?;

    Ok(Json(ApiResponse::message(200, "Collaborator invited successfully")))
}

/// GET /api/admin/invitations
pub async fn list_invitations(
    State(state): State<AppState>,
    AuthPrincipal(admin): AuthPrincipal,
) -> Result<Json<InvitationsResponse>, BackendError> {
    let stored = state.identity.admin_by_id(admin.id).await?.ok_or_else(|| {
        tracing::warn!("Admin not found: {}", admin.id);
        BackendError::not_found("Admin not found")
    })?;

    Ok(Json(ApiResponse::with_data(
        200,
        "Invitations retrieved successfully",
        stored.invitations,
    )))
}

/// POST /api/collaborator/create-notes
///
/// # Errors
///
/// * `400 Bad Request` - Title, content or workspace id missing
/// * `401 Unauthorized` - Caller is not a member of the workspace
/// * `404 Not Found` - Unknown workspace or collaborator
pub async fn create_notes(
    State(state): State<AppState>,
    AuthPrincipal(collaborator): AuthPrincipal,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NoteResponse>), BackendError> {
    let Json(request) = payload?;
    let [title, content, workspace_id] = require_all(
        [&request.title, &request.content, &request.workspace_id],
        "Title, content, and workspace ID are required",
    )?;
    let workspace_id = parse_id(workspace_id, "Workspace not found")?;

    let draft = NoteDraft {
        title: title.to_string(),
        content: content.to_string(),
        tags: tags_of(&request.tags),
    };
    let note = notes::create_note(
        state.identity.as_ref(),
        state.workspaces.as_ref(),
        collaborator.id,
        workspace_id,
        draft,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data(201, "Note created successfully", note)),
    ))
}

/// PUT /api/collaborator/edit-notes
///
/// # Errors
///
/// * `400 Bad Request` - Note id, title or content missing
/// * `401 Unauthorized` - Caller is not a member of the workspace
/// * `404 Not Found` - Unknown workspace, collaborator or note
pub async fn edit_notes(
    State(state): State<AppState>,
    AuthPrincipal(collaborator): AuthPrincipal,
    payload: Result<Json<EditNoteRequest>, JsonRejection>,
) -> Result<Json<NoteResponse>, BackendError> {
    let Json(request) = payload?;
    let [note_id, title, content] = require_all(
        [&request.note_id, &request.title, &request.content],
        "Note ID, title, and content are required",
    )?;
    let workspace_id = present(&request.workspace_id).ok_or_else(|| BackendError::not_found("Workspace not found"))?;
    let workspace_id = parse_id(workspace_id, "Workspace not found")?;
    let note_id = parse_id(note_id, "Note not found in this workspace")?;

    let draft = NoteDraft {
        title: title.to_string(),
        content: content.to_string(),
        tags: tags_of(&request.tags),
    };
    let note = notes::edit_note(
        state.identity.as_ref(),
        state.workspaces.as_ref(),
        collaborator.id,
        workspace_id,
        note_id,
        draft,
    )
    .await?;

    Ok(Json(ApiResponse::with_data(200, "Note updated successfully", note)))
}

/// GET /api/collaborator/all-notes?workspace_id=
pub async fn all_notes(
    State(state): State<AppState>,
    AuthPrincipal(collaborator): AuthPrincipal,
    query: Result<Query<WorkspaceQuery>, QueryRejection>,
) -> Result<Json<NotesResponse>, BackendError> {
    let Query(query) = query?;
    let [workspace_id] = require_all([&query.workspace_id], "Workspace ID is required")?;
    let workspace_id = parse_id(workspace_id, "Workspace not found")?;

    let notes = notes::list_notes(
        state.identity.as_ref(),
        state.workspaces.as_ref(),
        collaborator.id,
        workspace_id,
    )
    .await?;

    Ok(Json(ApiResponse::with_data(200, "Notes retrieved successfully", notes)))
}

/// GET /api/collaborator/all-workspaces
pub async fn all_workspaces(
    State(state): State<AppState>,
    AuthPrincipal(collaborator): AuthPrincipal,
) -> Result<Json<WorkspacesResponse>, BackendError> {
    let workspaces = notes::list_workspaces_for_collaborator(
        state.identity.as_ref(),
        state.workspaces.as_ref(),
        collaborator.id,
    )
    .await?;

    Ok(Json(ApiResponse::with_data(
        200,
        "Workspaces retrieved successfully",
        workspaces,
    )))
}
