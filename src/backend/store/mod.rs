//! Store Module
//!
//! Persistence for the two leaf components of the system: the identity
//! store (admins, collaborators) and the workspace store (workspaces with
//! their embedded notes).
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs      - Traits, StoreError, Document
//! ├── memory.rs   - In-process store (tests, no DATABASE_URL)
//! ├── postgres.rs - sqlx/PostgreSQL store, one JSONB document per row
//! └── update.rs   - Read-modify-write with retry on version conflict
//! ```
//!
//! # Concurrency
//!
//! Each aggregate is the unit of mutation. Saves are compare-and-swap on
//! the document `version`: saving a copy whose version no longer matches
//! the stored one fails with [`StoreError::VersionConflict`] instead of
//! overwriting a concurrent writer. Callers go through [`update`] which
//! re-reads and re-applies the mutation on conflict.

/// In-memory store
pub mod memory;

/// PostgreSQL store
pub mod postgres;

/// Retrying read-modify-write helpers
pub mod update;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::{Admin, Collaborator, Workspace};

/// Store-level failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique email constraint violated on insert
    #[error("email already registered: {email}")]
    DuplicateEmail { email: String },

    /// The document changed since it was read
    #[error("document {id} was modified concurrently")]
    VersionConflict { id: Uuid },

    /// Save targeted a document that does not exist
    #[error("document {id} does not exist")]
    Missing { id: Uuid },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A versioned aggregate root
pub trait Document: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
    fn version(&self) -> i64;
    /// Record a successful save
    fn stamp(&mut self, version: i64, at: DateTime<Utc>);
}

macro_rules! impl_document {
    ($($ty:ty),*) => {
        $(impl Document for $ty {
            fn id(&self) -> Uuid {
                self.id
            }

            fn version(&self) -> i64 {
                self.version
            }

            fn stamp(&mut self, version: i64, at: DateTime<Utc>) {
                self.version = version;
                self.updated_at = at.max(self.updated_at);
            }
        })*
    };
}

impl_document!(Admin, Collaborator, Workspace);

/// Admins and collaborators
///
/// Emails are unique within each principal kind; the same address may be
/// registered once as an admin and once as a collaborator.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn insert_admin(&self, admin: Admin) -> Result<Admin, StoreError>;
    async fn admin_by_id(&self, id: Uuid) -> Result<Option<Admin>, StoreError>;
    async fn admin_by_email(&self, email: &str) -> Result<Option<Admin>, StoreError>;
    async fn save_admin(&self, admin: Admin) -> Result<Admin, StoreError>;

    async fn insert_collaborator(&self, collaborator: Collaborator) -> Result<Collaborator, StoreError>;
    async fn collaborator_by_id(&self, id: Uuid) -> Result<Option<Collaborator>, StoreError>;
    async fn collaborator_by_email(&self, email: &str) -> Result<Option<Collaborator>, StoreError>;
    async fn save_collaborator(&self, collaborator: Collaborator) -> Result<Collaborator, StoreError>;
}

/// Workspaces and their embedded notes
#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    async fn insert_workspace(&self, workspace: Workspace) -> Result<Workspace, StoreError>;
    async fn workspace_by_id(&self, id: Uuid) -> Result<Option<Workspace>, StoreError>;
    /// Fetch several workspaces in the order of `ids`, skipping unknown ids
    async fn workspaces_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Workspace>, StoreError>;
    /// All workspaces in creation order
    async fn list_workspaces(&self) -> Result<Vec<Workspace>, StoreError>;
    async fn save_workspace(&self, workspace: Workspace) -> Result<Workspace, StoreError>;
}
