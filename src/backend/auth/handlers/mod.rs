//! Authentication Handlers Module
//!
//! HTTP handlers for the signup, login and me endpoints of both principal
//! kinds.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - Registration handlers
//! ├── login.rs    - Credential check handlers
//! └── me.rs       - Current principal handler
//! ```
//!
//! # Handlers
//!
//! - **`admin_signup`** / **`collaborator_signup`** - POST `/api/{kind}/signup`
//! - **`admin_login`** / **`collaborator_login`** - POST `/api/{kind}/login`
//! - **`get_me`** - GET `/api/{kind}/me`, behind the kind's auth middleware

/// Request and response types
pub mod types;

/// Signup handlers
pub mod signup;

/// Login handlers
pub mod login;

/// Current principal handler
pub mod me;

pub use types::{AuthResponse, LoginRequest, ProfileResponse, SignupRequest};

pub use login::{admin_login, collaborator_login};
pub use me::get_me;
pub use signup::{admin_signup, collaborator_signup};
