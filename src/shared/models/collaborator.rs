//! Collaborator principal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Collaborator document
///
/// `workspace_ids` is one half of the membership link; the other half is
/// `Workspace::collaborators`. `note_ids` is a denormalized index of notes
/// this collaborator authored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: Uuid,
    pub name: String,
    /// Unique among collaborators
    pub email: String,
    /// bcrypt hash
    pub password_hash: String,
    #[serde(default)]
    pub workspace_ids: Vec<Uuid>,
    #[serde(default)]
    pub note_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub version: i64,
}

impl Collaborator {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            workspace_ids: Vec::new(),
            note_ids: Vec::new(),
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    pub fn is_member_of(&self, workspace_id: Uuid) -> bool {
        self.workspace_ids.contains(&workspace_id)
    }

    /// Link this collaborator to a workspace. Returns `false` when the link
    /// was already present.
    pub fn join_workspace(&mut self, workspace_id: Uuid) -> bool {
        if self.is_member_of(workspace_id) {
            return false;
        }
        self.workspace_ids.push(workspace_id);
        true
    }

    /// Index an authored note. Returns `false` when already indexed.
    pub fn record_note(&mut self, note_id: Uuid) -> bool {
        if self.note_ids.contains(&note_id) {
            return false;
        }
        self.note_ids.push(note_id);
        true
    }
}
