/**
 * In-Memory Store
 *
 * Implements both store traits over maps guarded by a single
 * `tokio::sync::RwLock`. Used by the test suites and by the server when no
 * `DATABASE_URL` is configured; contents are lost on restart.
 */

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Document, IdentityStore, StoreError, WorkspaceStore};
use crate::shared::{Admin, Collaborator, Workspace};

/// A map of documents that remembers insertion order
#[derive(Debug)]
struct Collection<D> {
    docs: HashMap<Uuid, D>,
    order: Vec<Uuid>,
}

impl<D> Default for Collection<D> {
    fn default() -> Self {
        Self {
            docs: HashMap::new(),
            order: Vec::new(),
        }
    }
}

impl<D: Document> Collection<D> {
    fn insert(&mut self, doc: D) -> D {
        let id = doc.id();
        if self.docs.insert(id, doc.clone()).is_none() {
            self.order.push(id);
        }
        doc
    }

    fn get(&self, id: Uuid) -> Option<D> {
        self.docs.get(&id).cloned()
    }

    fn find(&self, predicate: impl Fn(&D) -> bool) -> Option<D> {
        self.order
            .iter()
            .filter_map(|id| self.docs.get(id))
            .find(|doc| predicate(doc))
            .cloned()
    }

    fn all(&self) -> Vec<D> {
        self.order.iter().filter_map(|id| self.docs.get(id)).cloned().collect()
    }

    fn save(&mut self, mut doc: D) -> Result<D, StoreError> {
        let id = doc.id();
        let current = self.docs.get_mut(&id).ok_or(StoreError::Missing { id })?;
        if current.version() != doc.version() {
            return Err(StoreError::VersionConflict { id });
        }
        doc.stamp(doc.version() + 1, Utc::now());
        *current = doc.clone();
        Ok(doc)
    }
}

#[derive(Debug, Default)]
struct Collections {
    admins: Collection<Admin>,
    collaborators: Collection<Collaborator>,
    workspaces: Collection<Workspace>,
}

/// In-process implementation of [`IdentityStore`] and [`WorkspaceStore`]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityStore for MemoryStore {
    async fn insert_admin(&self, admin: Admin) -> Result<Admin, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.admins.find(|a| a.email == admin.email).is_some() {
            return Err(StoreError::DuplicateEmail { email: admin.email });
        }
        Ok(inner.admins.insert(admin))
    }

    async fn admin_by_id(&self, id: Uuid) -> Result<Option<Admin>, StoreError> {
        Ok(self.inner.read().await.admins.get(id))
    }

    async fn admin_by_email(&self, email: &str) -> Result<Option<Admin>, StoreError> {
        Ok(self.inner.read().await.admins.find(|a| a.email == email))
    }

    async fn save_admin(&self, admin: Admin) -> Result<Admin, StoreError> {
        self.inner.write().await.admins.save(admin)
    }

    async fn insert_collaborator(&self, collaborator: Collaborator) -> Result<Collaborator, StoreError> {
        let mut inner = self.inner.write().await;
        if inner.collaborators.find(|c| c.email == collaborator.email).is_some() {
            return Err(StoreError::DuplicateEmail { email: collaborator.email });
        }
        Ok(inner.collaborators.insert(collaborator))
    }

    async fn collaborator_by_id(&self, id: Uuid) -> Result<Option<Collaborator>, StoreError> {
        Ok(self.inner.read().await.collaborators.get(id))
    }

    async fn collaborator_by_email(&self, email: &str) -> Result<Option<Collaborator>, StoreError> {
        Ok(self.inner.read().await.collaborators.find(|c| c.email == email))
    }

    async fn save_collaborator(&self, collaborator: Collaborator) -> Result<Collaborator, StoreError> {
        self.inner.write().await.collaborators.save(collaborator)
    }
}

#[async_trait]
impl WorkspaceStore for MemoryStore {
    async fn insert_workspace(&self, workspace: Workspace) -> Result<Workspace, StoreError> {
        Ok(self.inner.write().await.workspaces.insert(workspace))
    }

    async fn workspace_by_id(&self, id: Uuid) -> Result<Option<Workspace>, StoreError> {
        Ok(self.inner.read().await.workspaces.get(id))
    }

    async fn workspaces_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Workspace>, StoreError> {
        let inner = self.inner.read().await;
        Ok(ids.iter().filter_map(|id| inner.workspaces.get(*id)).collect())
    }

    async fn list_workspaces(&self) -> Result<Vec<Workspace>, StoreError> {
        Ok(self.inner.read().await.workspaces.all())
    }

    async fn save_workspace(&self, workspace: Workspace) -> Result<Workspace, StoreError> {
        self.inner.write().await.workspaces.save(workspace)
    }
}
