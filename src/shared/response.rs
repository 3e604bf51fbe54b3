//! JSON response envelope.
//!
//! Every successful response body is `{message, status}` plus an optional
//! `data` payload (and `token` for signup/login). Error bodies are built by
//! `backend::error::conversion` with the same `{message, status}` base.

use serde::{Deserialize, Serialize};

/// Success envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Envelope carrying a payload
    pub fn with_data(status: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            status,
            token: None,
            data: Some(data),
        }
    }

    /// Envelope carrying a token and a payload
    pub fn with_token(status: u16, message: impl Into<String>, token: String, data: T) -> Self {
        Self {
            message: message.into(),
            status,
            token: Some(token),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Envelope with no payload
    pub fn message(status: u16, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status,
            token: None,
            data: None,
        }
    }
}
