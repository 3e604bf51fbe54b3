/**
 * Read-Modify-Write With Retry
 *
 * Mutations load an aggregate, apply a change in memory and save it with a
 * version check. When another request saved the same aggregate in between,
 * the save fails with `VersionConflict`; the helpers here reload the
 * current copy and apply the change again, up to `MAX_WRITE_ATTEMPTS`.
 *
 * The `apply` closures must be safe to run more than once against fresh
 * copies (append-if-absent, overwrite fields).
 */

use std::future::Future;
use uuid::Uuid;

use super::{Document, IdentityStore, StoreError, WorkspaceStore};
use crate::backend::error::BackendError;
use crate::shared::{Admin, Collaborator, Workspace};

/// Attempts per mutation before giving up with an internal error
pub const MAX_WRITE_ATTEMPTS: usize = 3;

fn contention(kind: &str, id: Uuid) -> BackendError {
    BackendError::internal(
        format!("{kind} is being modified concurrently, retry the request"),
        format!("{kind} {id}: gave up after {MAX_WRITE_ATTEMPTS} attempts"),
    )
}

/// Apply, save, and on `VersionConflict` reload through `load` and apply
/// again. `kind` names the document in logs and errors.
async fn retry_update<D, T, Load, LoadFut, Save, SaveFut>(
    kind: &'static str,
    current: D,
    mut apply: impl FnMut(&mut D) -> Result<T, BackendError> + Send,
    mut load: Load,
    mut save: Save,
) -> Result<(D, T), BackendError>
where
    D: Document,
    Load: FnMut(Uuid) -> LoadFut,
    LoadFut: Future<Output = Result<Option<D>, StoreError>>,
    Save: FnMut(D) -> SaveFut,
    SaveFut: Future<Output = Result<D, StoreError>>,
{
    let id = current.id();
    let mut document = current;

    for attempt in 1..=MAX_WRITE_ATTEMPTS {
        let outcome = apply(&mut document)?;
        match save(document).await {
            Ok(saved) => return Ok((saved, outcome)),
            Err(StoreError::VersionConflict { .. }) if attempt < MAX_WRITE_ATTEMPTS => {
                tracing::warn!(document_id = %id, attempt, "{} changed concurrently, retrying", kind);
                document = load(id)
                    .await?
                    .ok_or_else(|| BackendError::not_found(format!("{kind} not found")))?;
            }
            Err(StoreError::VersionConflict { .. }) => break,
            Err(e) => return Err(e.into()),
        }
    }

    tracing::error!(document_id = %id, "{} save gave up after {} attempts", kind, MAX_WRITE_ATTEMPTS);
    Err(contention(kind, id))
}

/// Apply `apply` to `current` and save, retrying on version conflicts.
///
/// Returns the saved workspace and the closure's result.
pub async fn update_workspace<T>(
    store: &dyn WorkspaceStore,
    current: Workspace,
    apply: impl FnMut(&mut Workspace) -> Result<T, BackendError> + Send,
) -> Result<(Workspace, T), BackendError> {
    retry_update(
        "Workspace",
        current,
        apply,
        |id| store.workspace_by_id(id),
        |workspace| store.save_workspace(workspace),
    )
    .await
}

/// Collaborator counterpart of [`update_workspace`]
pub async fn update_collaborator<T>(
    store: &dyn IdentityStore,
    current: Collaborator,
    apply: impl FnMut(&mut Collaborator) -> Result<T, BackendError> + Send,
) -> Result<(Collaborator, T), BackendError> {
    retry_update(
        "Collaborator",
        current,
        apply,
        |id| store.collaborator_by_id(id),
        |collaborator| store.save_collaborator(collaborator),
    )
    .await
}

/// Admin counterpart of [`update_workspace`]
pub async fn update_admin<T>(
    store: &dyn IdentityStore,
    current: Admin,
    apply: impl FnMut(&mut Admin) -> Result<T, BackendError> + Send,
) -> Result<(Admin, T), BackendError> {
    retry_update(
        "Admin",
        current,
        apply,
        |id| store.admin_by_id(id),
        |admin| store.save_admin(admin),
    )
    .await
}
