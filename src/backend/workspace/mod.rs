//! Workspace Module
//!
//! Workspaces, membership and the notes embedded in them.
//!
//! # Module Structure
//!
//! ```text
//! workspace/
//! ├── mod.rs         - Module exports
//! ├── membership.rs  - Workspace creation, invites, membership checks
//! ├── notes.rs       - Note create/edit/list, workspaces of a collaborator
//! ├── types.rs       - Request/response types
//! └── handlers.rs    - HTTP handlers
//! ```

/// Workspace creation, invites and membership checks
pub mod membership;

/// Note lifecycle
pub mod notes;

/// Request and response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use membership::{authorize_member, check_membership, invite, Invite};
pub use notes::{create_note, edit_note, list_notes, list_workspaces_for_collaborator, NoteDraft};
