/**
 * Router Configuration
 *
 * Combines the admin and collaborator routers under `/api`, adds the
 * health check, the JSON fallbacks and the request tracing layer.
 */

use axum::{response::Json, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::routes::admin_routes::admin_routes;
use crate::backend::routes::collaborator_routes::collaborator_routes;
use crate::backend::server::AppState;
use crate::shared::ApiResponse;

/// GET /api/health
pub async fn health() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::with_data(200, "Backend Running Successfully!!!", ""))
}

async fn route_not_found() -> BackendError {
    BackendError::not_found("Route not found")
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Stores, token service and config
///
/// # Returns
///
/// Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/api/health", get(health))
        .nest("/api/admin", admin_routes(app_state.clone()))
        .nest("/api/collaborator", collaborator_routes(app_state.clone()))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
