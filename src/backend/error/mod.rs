//! Backend Error Module
//!
//! Error types for the HTTP layer and their conversion into responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and its status mapping
//! └── conversion.rs - IntoResponse and extractor-rejection conversions
//! ```
//!
//! Handlers return `Result<_, BackendError>`; axum turns the error into a
//! `{message, status, error?}` JSON body with the matching status code.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
