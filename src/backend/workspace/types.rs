/**
 * Workspace Handler Types
 *
 * Request bodies and query strings for the workspace and note endpoints.
 * Ids travel as strings and are parsed in the handlers.
 */

use serde::{Deserialize, Serialize};

use crate::shared::{ApiResponse, Invitation, Note, Workspace};

/// POST /api/admin/create-workspace
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreateWorkspaceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// POST /api/admin/invite-collaborator
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct InviteRequest {
    /// Email the collaborator signed up with
    pub email: Option<String>,
    pub workspace_id: Option<String>,
}

/// POST /api/collaborator/create-notes
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    /// Comma-separated tags
    pub tags: Option<String>,
    pub workspace_id: Option<String>,
}

/// PUT /api/collaborator/edit-notes
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct EditNoteRequest {
    pub workspace_id: Option<String>,
    pub note_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    /// Comma-separated tags; replaces the existing tags
    pub tags: Option<String>,
}

/// GET /api/collaborator/all-notes
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct WorkspaceQuery {
    pub workspace_id: Option<String>,
}

pub type WorkspaceResponse = ApiResponse<Workspace>;
pub type WorkspacesResponse = ApiResponse<Vec<Workspace>>;
pub type NoteResponse = ApiResponse<Note>;
pub type NotesResponse = ApiResponse<Vec<Note>>;
pub type InvitationsResponse = ApiResponse<Vec<Invitation>>;
