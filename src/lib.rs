//! collabnotes - Collaborative Notes Backend
//!
//! Admins create workspaces and invite collaborators; collaborators create,
//! edit and list notes inside the workspaces they belong to; a search
//! endpoint finds notes by workspace name, note text and tags.
//!
//! # Module Structure
//!
//! - **`shared`** - Serializable domain types, response envelopes, config
//!   - Admin, Collaborator, Workspace, Note
//!   - Search result types
//!   - `SharedError`, `AppConfig`
//!
//! - **`backend`** - Axum server
//!   - Auth (bcrypt, JWT scoped per principal kind)
//!   - Membership and note lifecycle with optimistic concurrency
//!   - Search with tag-overlap ranking and pagination
//!   - In-memory and PostgreSQL stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use collabnotes::backend::server::create_app;
//! use collabnotes::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5050").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for validation of shared types
//! - `backend::store::StoreError` for persistence
//! - `backend::error::BackendError` for everything that reaches HTTP

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
