/**
 * Admin Routes
 *
 * Mounted under `/api/admin`.
 *
 * ## Public
 * - `POST /signup` - Admin registration
 * - `POST /login` - Admin login
 * - `GET /search` - Note search across all workspaces
 *
 * ## Admin token required
 * - `GET /me` - Current admin profile
 * - `POST /create-workspace` - Create a workspace
 * - `POST /invite-collaborator` - Link a collaborator to a workspace
 * - `GET /invitations` - Invitation log of the current admin
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{admin_login, admin_signup, get_me};
use crate::backend::middleware::admin_auth;
use crate::backend::search::handlers::search;
use crate::backend::server::AppState;
use crate::backend::workspace::handlers::{create_workspace, invite_collaborator, list_invitations};

/// Build the admin router
///
/// # Arguments
///
/// * `state` - Needed by the auth middleware layer
pub fn admin_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(get_me))
        .route("/create-workspace", post(create_workspace))
        .route("/invite-collaborator", post(invite_collaborator))
        .route("/invitations", get(list_invitations))
        .route_layer(middleware::from_fn_with_state(state, admin_auth));

    Router::new()
        .route("/signup", post(admin_signup))
        .route("/login", post(admin_login))
        .route("/search", get(search))
        .merge(protected)
}
