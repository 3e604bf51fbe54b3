//! Authentication Module
//!
//! Registration, login and token handling for admins and collaborators.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── identity.rs     - Registration, credential checks, lookups
//! ├── sessions.rs     - JWT issue and verification
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - Registration handlers
//!     ├── login.rs    - Login handlers
//!     └── me.rs       - Current principal handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name, email, password → principal stored → token returned
//! 2. **Login**: email, password → credentials verified → token returned
//! 3. **Protected routes**: token verified by `backend::middleware` → principal attached to the request
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens carry the principal kind as audience and are rejected on the other kind's routes
//! - Tokens expire after `TOKEN_TTL_HOURS` (72 by default)
//! - Invalid credentials return 401 (no information leakage)

/// Registration and credential checks
pub mod identity;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use identity::Principal;
pub use sessions::{token_from_header, Claims, TokenError, TokenService};
