//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs                 - Module exports and documentation
//! ├── router.rs              - Main router, health check, fallbacks
//! ├── admin_routes.rs        - /api/admin/*
//! └── collaborator_routes.rs - /api/collaborator/*
//! ```
//!
//! Protected routes of each principal kind sit behind that kind's auth
//! middleware as a `route_layer`, so unknown paths still reach the JSON 404
//! fallback instead of failing authentication.

/// Main router creation
pub mod router;

/// Admin routes
pub mod admin_routes;

/// Collaborator routes
pub mod collaborator_routes;

pub use router::create_router;
