//! Middleware Module
//!
//! HTTP middleware applied in front of handlers.
//!
//! - **`auth`** - Token verification for admin and collaborator routes

pub mod auth;

pub use auth::{admin_auth, collaborator_auth, AuthPrincipal, AuthenticatedPrincipal};
