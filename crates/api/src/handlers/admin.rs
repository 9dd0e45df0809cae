//! Handlers for the password-gated admin surface.
//!
//! The gate is a shared literal compared in plaintext per request via the
//! `x-admin-password` header: no hashing, no sessions, no rate limiting.
//! That weakness is documented and kept by design. Template deletions act
//! on the in-memory working copy only; the registry is immutable.

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use formqr_core::template::TemplateId;

use crate::error::{AppError, AppResult};
use crate::handlers::templates::parse_template_id;
use crate::response::DataResponse;
use crate::state::AppState;

/// Header carrying the admin password on gated requests.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Body of `POST /admin/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// One row of the admin template list.
#[derive(Debug, Serialize)]
pub struct AdminTemplate {
    pub id: TemplateId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Reject the request unless it carries the admin password.
fn require_admin(headers: &HeaderMap, state: &AppState) -> AppResult<()> {
    let supplied = headers
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if supplied == state.config.admin_password {
        Ok(())
    } else {
        Err(AppError::Unauthorized("Incorrect password.".to_string()))
    }
}

// ---------------------------------------------------------------------------
// POST /admin/login
// ---------------------------------------------------------------------------

/// Check the admin password.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    if input.password != state.config.admin_password {
        tracing::warn!("Admin login rejected");
        return Err(AppError::Unauthorized("Incorrect password.".to_string()));
    }
    tracing::info!("Admin login accepted");
    Ok(Json(DataResponse {
        data: json!({ "authenticated": true }),
    }))
}

// ---------------------------------------------------------------------------
// GET /admin/templates
// ---------------------------------------------------------------------------

/// List the working copy of the template catalog.
pub async fn list_templates(
    headers: HeaderMap,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    require_admin(&headers, &state)?;

    let copy = state.admin_templates.lock().await;
    let items: Vec<AdminTemplate> = copy
        .list()
        .iter()
        .map(|&id| AdminTemplate {
            id,
            label: id.label(),
            icon: id.icon(),
        })
        .collect();
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// DELETE /admin/templates/{id}
// ---------------------------------------------------------------------------

/// Remove a template from the working copy. The registry is untouched; a
/// reset or restart brings the template back.
pub async fn delete_template(
    headers: HeaderMap,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    require_admin(&headers, &state)?;
    let id = parse_template_id(&id)?;

    let mut copy = state.admin_templates.lock().await;
    if !copy.remove(id) {
        return Err(AppError::NotFound(format!(
            "Template {} is not in the working copy",
            id.as_str()
        )));
    }
    tracing::info!(template = id.as_str(), "Template removed from working copy");
    Ok(Json(DataResponse {
        data: json!({ "deleted": true }),
    }))
}

// ---------------------------------------------------------------------------
// POST /admin/templates/reset
// ---------------------------------------------------------------------------

/// Restore the working copy to the full registry.
pub async fn reset_templates(
    headers: HeaderMap,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    require_admin(&headers, &state)?;

    let mut copy = state.admin_templates.lock().await;
    copy.reset();
    tracing::info!("Template working copy reset");
    Ok(Json(DataResponse {
        data: json!({ "count": copy.list().len() }),
    }))
}
