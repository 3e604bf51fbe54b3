/**
 * Current Principal Handlers
 *
 * GET /api/admin/me and GET /api/collaborator/me. Both sit behind the
 * matching auth middleware, which has already verified the token and that
 * the principal still exists.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::ProfileResponse;
use crate::backend::auth::identity;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthPrincipal;
use crate::backend::server::AppState;
use crate::shared::ApiResponse;

/// Return the profile of the authenticated principal
///
/// # Errors
///
/// * `404 Not Found` - Principal deleted after the middleware ran
pub async fn get_me(
    State(state): State<AppState>,
    AuthPrincipal(auth): AuthPrincipal,
) -> Result<Json<ProfileResponse>, BackendError> {
    let principal = identity::find_by_id(state.identity.as_ref(), auth.kind, auth.id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("{} not found: {}", auth.kind, auth.id);
            BackendError::not_found(identity::not_found_message(auth.kind))
        })?;

    Ok(Json(ApiResponse::with_data(
        200,
        "Profile retrieved successfully",
        principal.profile(),
    )))
}
