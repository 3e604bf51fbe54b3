//! Admin principal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of an invite issued by an admin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitation {
    pub email: String,
    pub workspace_id: Uuid,
    pub invited_at: DateTime<Utc>,
}

/// Admin document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub id: Uuid,
    pub name: String,
    /// Unique among admins
    pub email: String,
    /// bcrypt hash
    pub password_hash: String,
    #[serde(default)]
    pub invitations: Vec<Invitation>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub version: i64,
}

impl Admin {
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            invitations: Vec::new(),
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    /// Append an invitation unless the same (email, workspace) pair is
    /// already logged. Returns whether the log changed.
    pub fn record_invitation(&mut self, email: &str, workspace_id: Uuid) -> bool {
        let known = self
            .invitations
            .iter()
            .any(|i| i.workspace_id == workspace_id && i.email == email);
        if known {
            return false;
        }
        self.invitations.push(Invitation {
            email: email.to_string(),
            workspace_id,
            invited_at: Utc::now(),
        });
        true
    }
}
