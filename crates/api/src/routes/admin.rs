//! Route definitions for the `/admin` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. All except `/login` require the
/// `x-admin-password` header.
///
/// ```text
/// POST   /login               -> login
/// GET    /templates           -> list_templates   (working copy)
/// DELETE /templates/{id}      -> delete_template  (working copy only)
/// POST   /templates/reset     -> reset_templates
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(admin::login))
        .route("/templates", get(admin::list_templates))
        .route("/templates/{id}", axum::routing::delete(admin::delete_template))
        .route("/templates/reset", post(admin::reset_templates))
}
