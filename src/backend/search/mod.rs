//! Search Module
//!
//! Pattern and tag search across all workspaces and their notes.
//!
//! - **`engine`** - Matching, tag ranking, pagination (pure, no I/O)
//! - **`handlers`** - GET /api/admin/search

pub mod engine;
pub mod handlers;

pub use engine::{paginate, rank_notes, search, Matcher, SearchQuery};
