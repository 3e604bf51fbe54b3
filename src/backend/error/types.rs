/**
 * Backend Error Types
 *
 * One variant per failure category a request can end in. Every public
 * operation returns `Result<_, BackendError>` and the HTTP layer renders the
 * error through `IntoResponse` (see `conversion.rs`), so no failure escapes
 * a handler unformatted.
 *
 * # Status Code Mapping
 *
 * - `Validation` - 400 Bad Request (missing or malformed fields)
 * - `Conflict` - 400 Bad Request (email already registered)
 * - `Unauthorized` - 401 Unauthorized (credentials, tokens, membership)
 * - `NotFound` - 404 Not Found (admin, collaborator, workspace, note)
 * - `Internal` - 500 Internal Server Error (store failures, exhausted retries)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or malformed request fields
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Unique constraint violated (duplicate email)
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Bad credentials, bad token, or caller not a member
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
        /// Diagnostic detail (e.g. the token decoding failure)
        detail: Option<String>,
    },

    /// Referenced entity does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Unexpected failure
    #[error("Internal error: {message}: {detail}")]
    Internal {
        /// Human-readable error message
        message: String,
        /// Underlying cause
        detail: String,
    },
}

impl BackendError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            detail: None,
        }
    }

    /// Unauthorized with a diagnostic detail, e.g. why a token was rejected
    pub fn unauthorized_with(message: impl Into<String>, detail: impl ToString) -> Self {
        Self::Unauthorized {
            message: message.into(),
            detail: Some(detail.to_string()),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, detail: impl ToString) -> Self {
        Self::Internal {
            message: message.into(),
            detail: detail.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing message
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Conflict { message }
            | Self::Unauthorized { message, .. }
            | Self::NotFound { message }
            | Self::Internal { message, .. } => message,
        }
    }

    /// Diagnostic string for the `error` field, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail, .. } => detail.as_deref(),
            Self::Internal { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::ValidationError { message, .. } => Self::validation(message),
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail { .. } => Self::conflict("Email already exists"),
            other => Self::internal("Store operation failed", other),
        }
    }
}
