//! Shared Error Types
//!
//! Errors raised while validating the data types in `shared`, before any
//! store is touched. The backend turns them into a 400 response.
//!
//! # Usage
//!
//! ```rust
//! use collabnotes::shared::error::SharedError;
//!
//! let error = SharedError::validation("limit", "Limit must be at least 1");
//! assert_eq!(error.message(), "Limit must be at least 1");
//! ```
use thiserror::Error;

/// Shared error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The client-facing message
    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
