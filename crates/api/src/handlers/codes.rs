//! Handlers for code generation, summary confirmation, and history.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use formqr_core::history::HistoryEntry;
use formqr_core::template::TemplateId;
use formqr_qr::QrArtifact;

use crate::engine::{self, ConfirmOutcome, SubmitOutcome};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /codes`: a template id plus the raw field values.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub template: TemplateId,
    #[serde(default)]
    pub values: serde_json::Map<String, serde_json::Value>,
}

/// Body of `POST /codes/confirm`.
#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    pub pending_id: Uuid,
    pub accept: bool,
}

/// Client-facing view of a generated QR artifact. The raw PNG travels as a
/// data URL, same as it is stored in history.
#[derive(Debug, Serialize)]
pub struct ArtifactDto {
    pub image_data_url: String,
    pub source_url: String,
}

impl From<QrArtifact> for ArtifactDto {
    fn from(artifact: QrArtifact) -> Self {
        Self {
            image_data_url: artifact.image_data_url,
            source_url: artifact.source_url,
        }
    }
}

/// Response payload for submit/confirm.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CodeResponse {
    /// The QR code was generated and recorded in history.
    Ready {
        artifact: ArtifactDto,
        entry: HistoryEntry,
    },
    /// The payload was oversized; the candidate summary awaits an explicit
    /// accept/reject decision.
    NeedsSummary { pending_id: Uuid, summary: String },
    /// A pending summary was rejected; nothing was generated.
    Discarded,
}

// ---------------------------------------------------------------------------
// POST /codes
// ---------------------------------------------------------------------------

/// Submit filled form values and generate a QR code (or a summary
/// proposal when the payload is oversized).
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<SubmitRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = engine::submit(&state, input.template, &input.values).await?;
    let data = match outcome {
        SubmitOutcome::Ready { artifact, entry } => CodeResponse::Ready {
            artifact: artifact.into(),
            entry,
        },
        SubmitOutcome::NeedsSummary {
            pending_id,
            summary,
        } => CodeResponse::NeedsSummary {
            pending_id,
            summary,
        },
    };
    Ok(Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// POST /codes/confirm
// ---------------------------------------------------------------------------

/// Resolve a pending summary: accept generates the code from the summary
/// text, reject discards the submission.
pub async fn confirm(
    State(state): State<AppState>,
    Json(input): Json<ConfirmRequest>,
) -> AppResult<impl IntoResponse> {
    let outcome = engine::confirm(&state, input.pending_id, input.accept)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No pending submission {}", input.pending_id))
        })?;

    let data = match outcome {
        ConfirmOutcome::Ready { artifact, entry } => CodeResponse::Ready {
            artifact: artifact.into(),
            entry,
        },
        ConfirmOutcome::Discarded => CodeResponse::Discarded,
    };
    Ok(Json(DataResponse { data }))
}

// ---------------------------------------------------------------------------
// GET /codes/history
// ---------------------------------------------------------------------------

/// List generated codes, newest first.
pub async fn history(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = state.history.list().await?;
    tracing::debug!(count = items.len(), "Listed history");
    Ok(Json(DataResponse { data: items }))
}
