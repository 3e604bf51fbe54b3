//! Search wire types.
//!
//! One [`SearchHit`] per matching note, flattened across workspaces, and
//! the paginated [`SearchPage`] that wraps them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// A validated 1-based page number and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    pub page: u64,
    pub limit: u64,
}

impl Paging {
    /// Both values must be at least 1
    pub fn new(page: i64, limit: i64) -> Result<Self, SharedError> {
        let page = u64::try_from(page)
            .ok()
            .filter(|p| *p >= 1)
            .ok_or_else(|| SharedError::validation("page", "Page must be at least 1"))?;
        let limit = u64::try_from(limit)
            .ok()
            .filter(|l| *l >= 1)
            .ok_or_else(|| SharedError::validation("limit", "Limit must be at least 1"))?;
        Ok(Self { page, limit })
    }
}

/// A matching note together with the workspace it lives in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub workspace_id: String,
    pub workspace_name: String,
    pub note_id: String,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    /// Author id, or `null` for notes without one
    pub author: Option<String>,
    /// ISO-8601 (RFC 3339)
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Number of hits before pagination
    pub total: usize,
    pub page: u64,
    pub limit: u64,
    pub data: Vec<SearchHit>,
}

/// Search response envelope: `{message, status, total, page, limit, data}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub message: String,
    pub status: u16,
    #[serde(flatten)]
    pub page: SearchPage,
}
