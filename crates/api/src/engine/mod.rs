//! Submission engine: the validate -> serialize -> overflow -> encode ->
//! persist pipeline behind the `/codes` endpoints.
//!
//! Each submission walks a small state machine: validation either returns
//! it to the editor with errors or yields a serialized payload; a payload
//! within the size limit encodes directly; an oversized one round-trips
//! through the summarizer and parks in the [`PendingStore`] until the user
//! explicitly accepts or rejects the candidate summary. A summary is never
//! substituted without that decision.

mod pending;

pub use pending::{PendingStore, PendingSubmission};

use formqr_core::error::CoreError;
use formqr_core::history::HistoryEntry;
use formqr_core::overflow::exceeds_limit;
use formqr_core::serialize::serialize;
use formqr_core::template::TemplateId;
use formqr_core::validate::validate;
use formqr_core::values::FormValues;
use formqr_qr::{QrArtifact, QrOptions};
use uuid::Uuid;

use crate::error::AppResult;
use crate::state::AppState;

/// Result of submitting a filled form.
pub enum SubmitOutcome {
    /// The code was generated and recorded.
    Ready {
        artifact: QrArtifact,
        entry: HistoryEntry,
    },
    /// The payload is oversized; a candidate summary awaits the user's
    /// explicit decision.
    NeedsSummary { pending_id: Uuid, summary: String },
}

/// Run the full pipeline for one submission.
pub async fn submit(
    state: &AppState,
    template: TemplateId,
    raw: &serde_json::Map<String, serde_json::Value>,
) -> AppResult<SubmitOutcome> {
    let values = validate(template, raw).map_err(CoreError::Validation)?;
    let text = serialize(&values);

    let limit = state.config.overflow_threshold;
    if !exceeds_limit(&text, limit) {
        let (artifact, entry) = complete(state, &text, &values).await?;
        return Ok(SubmitOutcome::Ready { artifact, entry });
    }

    tracing::info!(
        template = template.as_str(),
        chars = text.chars().count(),
        limit,
        "Payload over size limit, requesting summary",
    );

    // One call, no retries; a failure surfaces to the user immediately and
    // the form stays editable.
    let summary = state.summarizer.summarize(&text).await?;
    let pending_id = state.pending.insert(values, summary.clone());
    Ok(SubmitOutcome::NeedsSummary { pending_id, summary })
}

/// Resolution of a pending summary decision.
pub enum ConfirmOutcome {
    /// The summary was accepted and the code generated from it.
    Ready {
        artifact: QrArtifact,
        entry: HistoryEntry,
    },
    /// The summary was rejected; nothing was generated.
    Discarded,
}

/// Apply the user's decision on a parked submission.
///
/// The pending entry is consumed either way; an unknown id means it was
/// never created, already resolved, or lost to a restart.
pub async fn confirm(
    state: &AppState,
    pending_id: Uuid,
    accept: bool,
) -> AppResult<Option<ConfirmOutcome>> {
    let Some(parked) = state.pending.take(pending_id) else {
        return Ok(None);
    };

    if !accept {
        tracing::info!(%pending_id, "Summary rejected, returning to editor");
        return Ok(Some(ConfirmOutcome::Discarded));
    }

    let (artifact, entry) = complete(state, &parked.summary, &parked.values).await?;
    Ok(Some(ConfirmOutcome::Ready { artifact, entry }))
}

/// Terminal pipeline stage: encode the text as a QR artifact and record the
/// generation in history.
async fn complete(
    state: &AppState,
    text: &str,
    values: &FormValues,
) -> AppResult<(QrArtifact, HistoryEntry)> {
    let options = QrOptions {
        ec_level: state.config.qr_ec_level,
    };
    let artifact = formqr_qr::generate(&state.config.public_origin, text, &options)?;

    let entry = HistoryEntry::new(
        chrono::Utc::now(),
        artifact.image_data_url.clone(),
        values,
    );
    state.history.append(entry.clone()).await?;

    tracing::info!(
        template = values.template().as_str(),
        entry_id = %entry.id,
        "QR code generated",
    );
    Ok((artifact, entry))
}
