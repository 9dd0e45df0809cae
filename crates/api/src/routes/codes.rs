//! Route definitions for the `/codes` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::codes;
use crate::state::AppState;

/// Routes mounted at `/codes`.
///
/// ```text
/// POST /            -> submit
/// POST /confirm     -> confirm    (accept/reject a pending summary)
/// GET  /history     -> history    (newest first)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(codes::submit))
        .route("/confirm", post(codes::confirm))
        .route("/history", get(codes::history))
}
