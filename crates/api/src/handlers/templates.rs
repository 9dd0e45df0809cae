//! Handlers for the public template catalog.

use axum::extract::Path;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use formqr_core::error::CoreError;
use formqr_core::template::{defaults, schema, FieldSpec, TemplateId};

use crate::error::AppResult;
use crate::response::DataResponse;

/// Catalog summary of one template.
#[derive(Debug, Serialize)]
pub struct TemplateSummary {
    pub id: TemplateId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Full description of one template: schema plus default values.
#[derive(Debug, Serialize)]
pub struct TemplateDetail {
    pub id: TemplateId,
    pub label: &'static str,
    pub icon: &'static str,
    pub fields: &'static [FieldSpec],
    pub defaults: serde_json::Map<String, serde_json::Value>,
}

/// Parse a template id path segment.
pub(crate) fn parse_template_id(id: &str) -> Result<TemplateId, CoreError> {
    TemplateId::parse(id).ok_or_else(|| CoreError::UnknownTemplate(id.to_string()))
}

// ---------------------------------------------------------------------------
// GET /templates
// ---------------------------------------------------------------------------

/// List all templates in the registry, in display order.
pub async fn list_templates() -> AppResult<impl IntoResponse> {
    let items: Vec<TemplateSummary> = TemplateId::ALL
        .into_iter()
        .map(|id| TemplateSummary {
            id,
            label: id.label(),
            icon: id.icon(),
        })
        .collect();
    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// GET /templates/{id}
// ---------------------------------------------------------------------------

/// Get one template's field schema and default values.
pub async fn get_template(Path(id): Path<String>) -> AppResult<impl IntoResponse> {
    let id = parse_template_id(&id)?;
    let detail = TemplateDetail {
        id,
        label: id.label(),
        icon: id.icon(),
        fields: schema(id),
        defaults: defaults(id),
    };
    Ok(Json(DataResponse { data: detail }))
}
