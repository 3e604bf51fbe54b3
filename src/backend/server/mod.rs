//! Server Module
//!
//! Server-side setup: state, database loading and app creation.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and its constructors
//! ├── config.rs       - Database loading, startup errors
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: `AppConfig::from_env` in the binary
//! 2. **Database**: connect and migrate when `DATABASE_URL` is set
//! 3. **State**: stores, token service and config in `AppState`
//! 4. **Router**: routes, auth middleware, tracing layer

/// Application state management
pub mod state;

/// Database loading and startup errors
pub mod config;

/// Server initialization
pub mod init;

pub use config::StartupError;
pub use init::create_app;
pub use state::AppState;
