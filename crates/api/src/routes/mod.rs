pub mod admin;
pub mod codes;
pub mod health;
pub mod templates;
pub mod viewer;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /templates                      list (public registry)
/// /templates/{id}                 schema + defaults
///
/// /codes                          submit (POST)
/// /codes/confirm                  resolve a pending summary (POST)
/// /codes/history                  history, newest first (GET)
///
/// /admin/login                    password check (POST)
/// /admin/templates                working copy list (gated)
/// /admin/templates/{id}           delete from working copy (gated)
/// /admin/templates/reset          restore working copy (gated, POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/templates", templates::router())
        .nest("/codes", codes::router())
        .nest("/admin", admin::router())
}
