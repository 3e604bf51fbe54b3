/**
 * Server Configuration
 *
 * Loads the optional PostgreSQL pool. Without `DATABASE_URL` the server
 * runs on the in-memory store; with it, a failed connection or migration
 * aborts startup instead of silently dropping to memory.
 */

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;

use crate::shared::{AppConfig, ConfigError};

/// Fatal startup failures
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Connect to PostgreSQL and run migrations
///
/// # Returns
///
/// - `Ok(Some(pool))` when `DATABASE_URL` is configured and reachable
/// - `Ok(None)` when no database is configured
pub async fn load_database(config: &AppConfig) -> Result<Option<PgPool>, StartupError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using the in-memory store; data is lost on restart.");
        return Ok(None);
    };

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            e
        })?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        e
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(Some(pool))
}
