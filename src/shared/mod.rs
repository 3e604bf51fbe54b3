//! Shared Module
//!
//! Types that do not depend on the server stack: the stored documents,
//! the JSON envelopes returned to clients, search result rows,
//! configuration and shared errors.

/// Stored documents (admins, collaborators, workspaces, notes)
pub mod models;

/// Search result wire types
pub mod search;

/// Response envelope
pub mod response;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use models::{parse_tags, Admin, Collaborator, Invitation, Note, PrincipalKind, Profile, Workspace};
pub use search::{Paging, SearchHit, SearchPage, SearchResponse};
pub use response::ApiResponse;
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
