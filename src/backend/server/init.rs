/**
 * Server Initialization
 *
 * 1. Load the optional database (runs migrations)
 * 2. Pick the store: PostgreSQL when configured, in-memory otherwise
 * 3. Build the state and the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, StartupError};
use crate::backend::server::state::AppState;
use crate::backend::store::PgStore;
use crate::shared::AppConfig;

/// Create and configure the Axum application
pub async fn create_app(config: AppConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing collabnotes backend server");

    let state = match load_database(&config).await? {
        Some(pool) => {
            tracing::info!("Using PostgreSQL store");
            AppState::postgres(config, PgStore::new(pool))
        }
        None => AppState::in_memory(config),
    };

    let app = create_router(state);
    tracing::info!("Router configured");
    Ok(app)
}
