//! Common test utilities and helpers
//!
//! - In-process app driven through `tower::ServiceExt::oneshot`
//! - Signup/login helpers for both principal kinds
//! - Custom assertion macros

#[macro_use]
pub mod assertions;
pub mod auth_helpers;
pub mod server;

pub use auth_helpers::*;
pub use server::*;
