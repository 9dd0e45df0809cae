use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use formqr_core::error::CoreError;
use formqr_qr::QrError;
use formqr_store::StoreError;
use formqr_summarizer::SummarizerError;

/// Application-level error type for HTTP handlers.
///
/// Wraps domain errors from the library crates and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses; every failure is converted here, nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `formqr_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// History persistence failed. Surfaced, never swallowed.
    #[error("History persistence failed: {0}")]
    Store(#[from] StoreError),

    /// The summarization service call failed.
    #[error("Summarization failed: {0}")]
    Summarization(#[from] SummarizerError),

    /// Payload encoding or QR rendering failed. Terminal for the
    /// submission.
    #[error("QR generation failed: {0}")]
    Qr(#[from] QrError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A missing resource with a human-readable message.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The admin gate rejected the request.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Validation carries structured per-field details alongside the
        // combined message; handle it before the flat cases.
        if let AppError::Core(CoreError::Validation(errors)) = &self {
            let body = json!({
                "error": errors.to_string(),
                "code": "VALIDATION_ERROR",
                "details": errors,
            });
            return (StatusCode::BAD_REQUEST, axum::Json(body)).into_response();
        }

        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(_) => unreachable!("handled above"),
                CoreError::UnknownTemplate(id) => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("Unknown template: {id}"),
                ),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Store(err) => {
                tracing::error!(error = %err, "History persistence error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PERSISTENCE_ERROR",
                    "Failed to save history".to_string(),
                )
            }

            AppError::Summarization(err) => (
                StatusCode::BAD_GATEWAY,
                "SUMMARIZATION_FAILED",
                match err {
                    SummarizerError::Api { body, .. } if !body.is_empty() => body.clone(),
                    _ => "Could not shorten the data. Please edit manually.".to_string(),
                },
            ),

            AppError::Qr(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "QR_ENCODING_FAILED",
                format!("Failed to generate QR code: {err}"),
            ),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
