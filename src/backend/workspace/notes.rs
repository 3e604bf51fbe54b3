/**
 * Note Lifecycle
 *
 * Create, edit and list the notes embedded in a workspace. Every operation
 * goes through `membership::authorize_member` first, so a collaborator who
 * is not linked to the workspace gets `Unauthorized` even when the
 * workspace exists.
 *
 * Notes are saved as part of their workspace document; concurrent writers
 * to the same workspace are reconciled by `store::update`.
 */

use uuid::Uuid;

use super::membership::{authorize_member, require_collaborator};
use crate::backend::error::BackendError;
use crate::backend::store::update::{update_collaborator, update_workspace};
use crate::backend::store::{IdentityStore, WorkspaceStore};
use crate::shared::{Note, Workspace};

/// Title, content and tags of a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

/// Create a note authored by `collaborator_id`
///
/// Appends the note to the workspace and its id to the collaborator's
/// `note_ids`, in that order.
pub async fn create_note(
    identity: &dyn IdentityStore,
    workspaces: &dyn WorkspaceStore,
    collaborator_id: Uuid,
    workspace_id: Uuid,
    draft: NoteDraft,
) -> Result<Note, BackendError> {
    let (workspace, collaborator) = authorize_member(identity, workspaces, collaborator_id, workspace_id).await?;

    let note = Note::new(collaborator_id, draft.title, draft.content, draft.tags);
    let note_id = note.id;

    update_workspace(workspaces, workspace, |ws| {
        ws.push_note(note.clone());
        Ok(())
    })
    .await?;
    update_collaborator(identity, collaborator, |c| Ok(c.record_note(note_id))).await?;

    tracing::info!("Note {} created in workspace {} by {}", note_id, workspace_id, collaborator_id);
    Ok(note)
}

/// Overwrite title, content and tags of an existing note
///
/// Any member may edit any note in the workspace; `created_at` and `author`
/// are left unchanged. Only the workspace document is saved.
pub async fn edit_note(
    identity: &dyn IdentityStore,
    workspaces: &dyn WorkspaceStore,
    collaborator_id: Uuid,
    workspace_id: Uuid,
    note_id: Uuid,
    draft: NoteDraft,
) -> Result<Note, BackendError> {
    let (workspace, _) = authorize_member(identity, workspaces, collaborator_id, workspace_id).await?;

    let (_, note) = update_workspace(workspaces, workspace, |ws| {
        let note = ws.note_mut(note_id).ok_or_else(|| {
            tracing::warn!("Note {} not found in workspace {}", note_id, workspace_id);
            BackendError::not_found("Note not found in this workspace")
        })?;
        note.revise(draft.title.clone(), draft.content.clone(), draft.tags.clone());
        Ok(note.clone())
    })
    .await?;

    tracing::info!("Note {} updated in workspace {} by {}", note_id, workspace_id, collaborator_id);
    Ok(note)
}

/// All notes of a workspace in insertion order
pub async fn list_notes(
    identity: &dyn IdentityStore,
    workspaces: &dyn WorkspaceStore,
    collaborator_id: Uuid,
    workspace_id: Uuid,
) -> Result<Vec<Note>, BackendError> {
    let (workspace, _) = authorize_member(identity, workspaces, collaborator_id, workspace_id).await?;
    Ok(workspace.notes)
}

/// Every workspace the collaborator belongs to, with embedded notes, in the
/// order they were joined. Workspaces that no longer exist are skipped.
pub async fn list_workspaces_for_collaborator(
    identity: &dyn IdentityStore,
    workspaces: &dyn WorkspaceStore,
    collaborator_id: Uuid,
) -> Result<Vec<Workspace>, BackendError> {
    let collaborator = require_collaborator(identity, collaborator_id).await?;
    let found = workspaces.workspaces_by_ids(&collaborator.workspace_ids).await?;

    if found.len() < collaborator.workspace_ids.len() {
        tracing::warn!(
            "Collaborator {} references {} missing workspace(s)",
            collaborator_id,
            collaborator.workspace_ids.len() - found.len()
        );
    }
    Ok(found)
}
