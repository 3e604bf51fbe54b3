/**
 * Login Handlers
 *
 * POST /api/admin/login and POST /api/collaborator/login.
 *
 * # Security
 *
 * - Passwords are verified using bcrypt
 * - Unknown email and wrong password both return 401 "Invalid credentials"
 * - The issued token is only accepted on routes of the same principal kind
 */

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::identity;
use crate::backend::error::BackendError;
use crate::backend::server::AppState;
use crate::backend::validation::require_all;
use crate::shared::{ApiResponse, PrincipalKind};

/// Admin login handler
///
/// # Errors
///
/// * `400 Bad Request` - Email or password missing
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Store or token failure
pub async fn admin_login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;
    login(&state, PrincipalKind::Admin, request).await
}

/// Collaborator login handler
pub async fn collaborator_login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;
    login(&state, PrincipalKind::Collaborator, request).await
}

async fn login(
    state: &AppState,
    kind: PrincipalKind,
    request: LoginRequest,
) -> Result<Json<AuthResponse>, BackendError> {
    let [email, password] = require_all([&request.email, &request.password], "Email and password required")?;
    tracing::info!("Login request for {}: {}", kind, email.trim());

    let principal = identity::verify_credentials(state.identity.as_ref(), kind, email, password).await?;

    let token = state
        .tokens
        .issue(kind, principal.id(), principal.email())
        .map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            BackendError::internal("Server error", e)
        })?;

    tracing::info!("{} logged in: {}", kind, principal.email());

    Ok(Json(ApiResponse::with_token(
        200,
        "Login successful",
        token,
        principal.profile(),
    )))
}
