/**
 * Search Handler
 *
 * GET /api/admin/search?workspace=&note=&tags=&page=&limit=
 *
 * Public, as the admin dashboard calls it before login. All parameters are
 * optional; see `engine` for matching and ranking.
 */

use axum::{
    extract::rejection::QueryRejection,
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

use super::engine::{self, SearchQuery};
use crate::backend::error::BackendError;
use crate::backend::server::AppState;
use crate::shared::SearchResponse;

/// Query string parameters
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SearchParams {
    pub workspace: Option<String>,
    pub note: Option<String>,
    pub tags: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Search handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed query string, `page < 1` or `limit < 1`
/// * `500 Internal Server Error` - Store failure
pub async fn search(
    State(state): State<AppState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, BackendError> {
    let Query(params) = query?;
    let query = SearchQuery::new(
        params.workspace.as_deref(),
        params.note.as_deref(),
        params.tags.as_deref(),
        params.page,
        params.limit,
    )?;

    let workspaces = state.workspaces.list_workspaces().await.map_err(|e| {
        tracing::error!("Failed to load workspaces for search: {:?}", e);
        BackendError::internal("Error performing search", e)
    })?;

    let page = engine::search(&workspaces, &query);

    Ok(Json(SearchResponse {
        message: "Search completed successfully".to_string(),
        status: 200,
        page,
    }))
}
