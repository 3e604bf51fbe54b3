//! Domain Documents
//!
//! The aggregates persisted by the stores and the profile projection that
//! is safe to return to clients.
//!
//! # Aggregates
//!
//! - [`Admin`] - creates workspaces and invites collaborators
//! - [`Collaborator`] - member of workspaces, author of notes
//! - [`Workspace`] - owns an ordered collection of embedded [`Note`]s
//!
//! Every aggregate carries a `version` used by the stores for
//! compare-and-swap saves. The version is not part of the serialized
//! document; stores track it alongside.

/// Admin principal and its invitation log
pub mod admin;

/// Collaborator principal and its membership list
pub mod collaborator;

/// Workspace aggregate and embedded notes
pub mod workspace;

pub use admin::{Admin, Invitation};
pub use collaborator::Collaborator;
pub use workspace::{parse_tags, Note, Workspace};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of authenticated principal.
///
/// Tokens are scoped to one kind; see `backend::auth::sessions`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    Admin,
    Collaborator,
}

impl PrincipalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Collaborator => "collaborator",
        }
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Public profile of a principal (never includes the password hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&Admin> for Profile {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id.to_string(),
            name: admin.name.clone(),
            email: admin.email.clone(),
        }
    }
}

impl From<&Collaborator> for Profile {
    fn from(collaborator: &Collaborator) -> Self {
        Self {
            id: collaborator.id.to_string(),
            name: collaborator.name.clone(),
            email: collaborator.email.clone(),
        }
    }
}
