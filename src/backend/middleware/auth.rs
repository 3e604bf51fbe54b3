/**
 * Authentication Middleware
 *
 * Guards the protected routes of each principal kind. The middleware reads
 * the `Authorization` header (`Bearer <token>` or a bare token), verifies
 * the token against the kind's audience, checks the principal still exists
 * and attaches it to the request extensions for handlers.
 *
 * # Failures
 *
 * - No header or empty token: 401 "Token is missing"
 * - Bad signature, expired, wrong kind: 401 "Invalid or expired token"
 * - Principal no longer stored: 404 "Admin not found" / "Collaborator not found"
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::{identity, token_from_header};
use crate::backend::error::BackendError;
use crate::backend::server::AppState;
use crate::shared::PrincipalKind;

/// Principal data extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedPrincipal {
    pub id: Uuid,
    pub email: String,
    pub kind: PrincipalKind,
}

/// Middleware for `/api/admin/*` protected routes
pub async fn admin_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    authenticate(&state, PrincipalKind::Admin, request, next).await
}

/// Middleware for `/api/collaborator/*` protected routes
pub async fn collaborator_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    authenticate(&state, PrincipalKind::Collaborator, request, next).await
}

async fn authenticate(
    state: &AppState,
    kind: PrincipalKind,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let principal = authorize(state, kind, request.headers().get(AUTHORIZATION)).await?;
    request.extensions_mut().insert(principal);
    Ok(next.run(request).await)
}

/// Resolve the `Authorization` header to a stored principal of `kind`
pub async fn authorize(
    state: &AppState,
    kind: PrincipalKind,
    header: Option<&axum::http::HeaderValue>,
) -> Result<AuthenticatedPrincipal, BackendError> {
    let token = header
        .and_then(|h| h.to_str().ok())
        .and_then(token_from_header)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header on {} route", kind);
            BackendError::unauthorized("Token is missing")
        })?;

    let claims = state.tokens.verify(kind, token).map_err(|e| {
        tracing::warn!("Invalid token on {} route: {:?}", kind, e);
        BackendError::unauthorized_with("Invalid or expired token", e)
    })?;

    let id = claims.subject_id().map_err(|e| {
        tracing::warn!("Invalid subject in token: {:?}", e);
        BackendError::unauthorized_with("Invalid or expired token", e)
    })?;

    if identity::find_by_id(state.identity.as_ref(), kind, id).await?.is_none() {
        tracing::warn!("{} not found for token subject {}", kind, id);
        return Err(BackendError::not_found(identity::not_found_message(kind)));
    }

    Ok(AuthenticatedPrincipal {
        id,
        email: claims.email,
        kind,
    })
}

/// Axum extractor for the principal attached by [`admin_auth`] or
/// [`collaborator_auth`]
#[derive(Clone, Debug)]
pub struct AuthPrincipal(pub AuthenticatedPrincipal);

impl FromRequestParts<AppState> for AuthPrincipal {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &AppState) -> Result<Self, Self::Rejection> {
        let principal = parts
            .extensions
            .get::<AuthenticatedPrincipal>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedPrincipal not found in request extensions");
                BackendError::unauthorized("Token is missing")
            })?;

        Ok(AuthPrincipal(principal))
    }
}
