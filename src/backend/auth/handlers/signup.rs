/**
 * Signup Handlers
 *
 * POST /api/admin/signup and POST /api/collaborator/signup.
 *
 * # Registration Process
 *
 * 1. Require name, email and password
 * 2. Reject an email already registered for the same principal kind
 * 3. Hash password using bcrypt
 * 4. Store the principal
 * 5. Issue a token scoped to the principal kind
 */

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::auth::identity;
use crate::backend::error::BackendError;
use crate::backend::server::AppState;
use crate::backend::validation::require_all;
use crate::shared::{ApiResponse, PrincipalKind};

/// Admin signup handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing field or email already registered
/// * `500 Internal Server Error` - Hashing, store or token failure
///
/// # Example Request
///
/// ```http
/// POST /api/admin/signup HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "Ada", "email": "ada@example.com", "password": "secret"}
/// ```
pub async fn admin_signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;
    signup(&state, PrincipalKind::Admin, request).await
}

/// Collaborator signup handler
pub async fn collaborator_signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(request) = payload?;
    signup(&state, PrincipalKind::Collaborator, request).await
}

async fn signup(
    state: &AppState,
    kind: PrincipalKind,
    request: SignupRequest,
) -> Result<Json<AuthResponse>, BackendError> {
    let [name, email, password] = require_all(
        [&request.name, &request.email, &request.password],
        "Name, email, and password are required",
    )?;
    tracing::info!("Signup request for {}: {}", kind, email.trim());

    let principal = identity::register(
        state.identity.as_ref(),
        kind,
        name,
        email,
        password,
        state.config.bcrypt_cost,
    )
    .await?;

    let token = state
        .tokens
        .issue(kind, principal.id(), principal.email())
        .map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            BackendError::internal("Server error", e)
        })?;

    Ok(Json(ApiResponse::with_token(
        200,
        "Signup successful",
        token,
        principal.profile(),
    )))
}
