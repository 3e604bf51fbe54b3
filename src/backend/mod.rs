//! Backend Module
//!
//! The Axum HTTP server for collabnotes: admins create workspaces and
//! invite collaborators, collaborators write notes inside the workspaces
//! they belong to, and anyone can search notes across workspaces.
//!
//! # Architecture
//!
//! - **`server`** - State, database loading, app creation
//! - **`routes`** - Router assembly under `/api`
//! - **`auth`** - Registration, login, JWT sessions
//! - **`middleware`** - Token verification per principal kind
//! - **`workspace`** - Membership and note lifecycle
//! - **`search`** - Cross-workspace note search
//! - **`store`** - Store traits, in-memory and PostgreSQL implementations
//! - **`error`** - `BackendError` and its JSON rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── validation.rs   - Required-field checks
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── workspace/      - Workspaces, membership, notes
//! ├── search/         - Search engine and handler
//! ├── store/          - Persistence
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! Auth middleware resolves the caller → membership is checked for the
//! target workspace → the note operation or search runs against the stores.
//! Every failure is a `BackendError` rendered as `{message, status, error?}`.

/// Server initialization and state
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication
pub mod auth;

/// Request middleware
pub mod middleware;

/// Workspaces, membership and notes
pub mod workspace;

/// Search engine
pub mod search;

/// Persistence
pub mod store;

/// Error types
pub mod error;

/// Required-field checks
pub mod validation;

pub use error::BackendError;
pub use server::{create_app, AppState};
