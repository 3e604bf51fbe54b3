/**
 * Collaborator Routes
 *
 * Mounted under `/api/collaborator`.
 *
 * ## Public
 * - `POST /signup`, `POST /login`
 *
 * ## Collaborator token required
 * - `GET /me`
 * - `POST /create-notes` - 201 with the created note
 * - `PUT /edit-notes`
 * - `GET /all-notes?workspace_id=`
 * - `GET /all-workspaces`
 */

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};

use crate::backend::auth::handlers::{collaborator_login, collaborator_signup, get_me};
use crate::backend::middleware::collaborator_auth;
use crate::backend::server::AppState;
use crate::backend::workspace::handlers::{all_notes, all_workspaces, create_notes, edit_notes};

/// Build the collaborator router
pub fn collaborator_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(get_me))
        .route("/create-notes", post(create_notes))
        .route("/edit-notes", put(edit_notes))
        .route("/all-notes", get(all_notes))
        .route("/all-workspaces", get(all_workspaces))
        .route_layer(middleware::from_fn_with_state(state, collaborator_auth));

    Router::new()
        .route("/signup", post(collaborator_signup))
        .route("/login", post(collaborator_login))
        .merge(protected)
}
