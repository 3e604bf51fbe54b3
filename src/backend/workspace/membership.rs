/**
 * Membership Coordinator
 *
 * Owns the link between a collaborator and a workspace. The link is stored
 * on both documents (`Workspace::collaborators` and
 * `Collaborator::workspace_ids`), which are saved separately.
 *
 * # Link Protocol
 *
 * `invite` writes the workspace side first and the collaborator side
 * second. Access checks read the collaborator side, so if the second write
 * fails the collaborator simply has no access yet; retrying the invite
 * completes the link. Every append is check-before-append, so retries
 * never duplicate a link.
 */

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::store::update::{update_admin, update_collaborator, update_workspace};
use crate::backend::store::{IdentityStore, WorkspaceStore};
use crate::shared::{Collaborator, Workspace};

/// Result of a successful invite
#[derive(Debug, Clone)]
pub struct Invite {
    pub workspace: Workspace,
    pub collaborator: Collaborator,
    /// `false` when both sides were already linked
    pub newly_linked: bool,
}

/// Create a workspace owned by `admin_id`
pub async fn create_workspace(
    workspaces: &dyn WorkspaceStore,
    admin_id: Uuid,
    name: &str,
    description: &str,
) -> Result<Workspace, BackendError> {
    let workspace = Workspace::new(name.trim().to_string(), description.to_string(), Some(admin_id));
    let workspace = workspaces.insert_workspace(workspace).await?;
    tracing::info!("Workspace created: {} ({}) by admin {}", workspace.name, workspace.id, admin_id);
    Ok(workspace)
}

/// Load a workspace or fail with `NotFound`
pub async fn require_workspace(
    workspaces: &dyn WorkspaceStore,
    workspace_id: Uuid,
) -> Result<Workspace, BackendError> {
    workspaces.workspace_by_id(workspace_id).await?.ok_or_else(|| {
        tracing::warn!("Workspace not found: {}", workspace_id);
        BackendError::not_found("Workspace not found")
    })
}

/// Load a collaborator or fail with `NotFound`
pub async fn require_collaborator(
    identity: &dyn IdentityStore,
    collaborator_id: Uuid,
) -> Result<Collaborator, BackendError> {
    identity.collaborator_by_id(collaborator_id).await?.ok_or_else(|| {
        tracing::warn!("Collaborator not found: {}", collaborator_id);
        BackendError::not_found("Collaborator not found")
    })
}

/// Link the collaborator registered under `email` to a workspace
///
/// # Arguments
/// * `identity` - Identity store
/// * `workspaces` - Workspace store
/// * `admin_id` - Inviting admin, whose invitation log is updated
/// * `email` - Collaborator email
/// * `workspace_id` - Target workspace
///
/// # Errors
/// `NotFound` for an unknown workspace, collaborator or admin; `Internal`
/// when a store write fails (safe to retry).
pub async fn invite(
    identity: &dyn IdentityStore,
    workspaces: &dyn WorkspaceStore,
    admin_id: Uuid,
    email: &str,
    workspace_id: Uuid,
) -> Result<Invite, BackendError> {
    let email = email.trim();
    let workspace = require_workspace(workspaces, workspace_id).await?;
    let collaborator = identity.collaborator_by_email(email).await?.ok_or_else(|| {
        tracing::warn!("Collaborator not found: {}", email);
        BackendError::not_found("Collaborator not found")
    })?;
    let collaborator_id = collaborator.id;

    let already_linked =
        workspace.has_collaborator(collaborator_id) && collaborator.is_member_of(workspace_id);

    let workspace = if workspace.has_collaborator(collaborator_id) {
        workspace
    } else {
        let (saved, _) = update_workspace(workspaces, workspace, |ws| Ok(ws.add_collaborator(collaborator_id))).await?;
        saved
    };

    let collaborator = if collaborator.is_member_of(workspace_id) {
        collaborator
    } else {
        let (saved, _) =
            update_collaborator(identity, collaborator, |c| Ok(c.join_workspace(workspace_id))).await?;
        saved
    };

    let admin = identity.admin_by_id(admin_id).await?.ok_or_else(|| {
        tracing::warn!("Admin not found: {}", admin_id);
        BackendError::not_found("Admin not found")
    })?;
    if !admin.invitations.iter().any(|i| i.email == email && i.workspace_id == workspace_id) {
        update_admin(identity, admin, |a| Ok(a.record_invitation(email, workspace_id))).await?;
    }

    tracing::info!(
        "Collaborator {} linked to workspace {} (already linked: {})",
        collaborator_id,
        workspace_id,
        already_linked
    );

    Ok(Invite {
        workspace,
        collaborator,
        newly_linked: !already_linked,
    })
}

/// Whether `collaborator` is linked to `workspace_id`
pub fn check_membership(collaborator: &Collaborator, workspace_id: Uuid) -> bool {
    collaborator.is_member_of(workspace_id)
}

/// Resolve the workspace and the collaborator and require membership.
///
/// Checks run in order: workspace (`NotFound`), collaborator (`NotFound`),
/// membership (`Unauthorized`).
pub async fn authorize_member(
    identity: &dyn IdentityStore,
    workspaces: &dyn WorkspaceStore,
    collaborator_id: Uuid,
    workspace_id: Uuid,
) -> Result<(Workspace, Collaborator), BackendError> {
    let workspace = require_workspace(workspaces, workspace_id).await?;
    let collaborator = require_collaborator(identity, collaborator_id).await?;

    if !check_membership(&collaborator, workspace_id) {
        tracing::warn!("Collaborator {} is not a member of workspace {}", collaborator_id, workspace_id);
        return Err(BackendError::unauthorized("You are not a member of this workspace"));
    }

    Ok((workspace, collaborator))
}
