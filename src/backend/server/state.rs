/**
 * Application State Management
 *
 * `AppState` is the single state container handed to every handler. It
 * holds the two stores behind trait objects, so the same router runs on
 * PostgreSQL in production and on the in-memory store in tests.
 */

use std::sync::Arc;

use crate::backend::auth::TokenService;
use crate::backend::store::{IdentityStore, MemoryStore, PgStore, WorkspaceStore};
use crate::shared::AppConfig;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Admins and collaborators
    pub identity: Arc<dyn IdentityStore>,

    /// Workspaces and embedded notes
    pub workspaces: Arc<dyn WorkspaceStore>,

    /// Token issue/verification with the configured key and ttl
    pub tokens: TokenService,

    /// Validated configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// State backed by one [`MemoryStore`] serving both traits
    pub fn in_memory(config: AppConfig) -> Self {
        let store = MemoryStore::new();
        Self {
            identity: Arc::new(store.clone()),
            workspaces: Arc::new(store),
            tokens: TokenService::from_config(&config),
            config: Arc::new(config),
        }
    }

    /// State backed by PostgreSQL
    pub fn postgres(config: AppConfig, store: PgStore) -> Self {
        Self {
            identity: Arc::new(store.clone()),
            workspaces: Arc::new(store),
            tokens: TokenService::from_config(&config),
            config: Arc::new(config),
        }
    }

    /// In-memory state with a fixed key and the cheapest bcrypt cost
    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        let config = AppConfig::builder()
            .jwt_secret("unit-test-secret")
            .bcrypt_cost(4)
            .build()
            .expect("test config is valid");
        Self::in_memory(config)
    }
}
