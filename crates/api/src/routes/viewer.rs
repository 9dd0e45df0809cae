//! Route definition for the viewer endpoint (root-level, not under
//! `/api/v1` -- the URL is baked into generated QR codes).

use axum::routing::get;
use axum::Router;

use crate::handlers::viewer;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// GET /view?data=...   -> view (decode the payload)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/view", get(viewer::view))
}
