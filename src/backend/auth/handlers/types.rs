/**
 * Authentication Handler Types
 *
 * Request and response types shared by the signup, login and me handlers
 * of both principal kinds.
 */

use serde::{Deserialize, Serialize};

use crate::shared::{ApiResponse, Profile};

/// Sign up request
///
/// Fields are optional so a missing one is reported with the endpoint's
/// validation message.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignupRequest {
    /// Display name
    pub name: Option<String>,
    /// Email address, unique per principal kind
    pub email: Option<String>,
    /// Password (hashed before storage)
    pub password: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Signup and login response: envelope with `token` and the profile in `data`
pub type AuthResponse = ApiResponse<Profile>;

/// Me response: envelope with the profile in `data`
pub type ProfileResponse = ApiResponse<Profile>;
