//! Handler for the viewer URL embedded in generated QR codes.

use axum::extract::Query;
use serde::Deserialize;

use formqr_qr::payload::decode_payload;

use crate::error::{AppError, AppResult};

/// Query parameters for `GET /view`.
#[derive(Debug, Deserialize)]
pub struct ViewerParams {
    pub data: String,
}

/// Decode the base64 payload and return the original text.
///
/// The payload carries the password in plaintext as its first line; the
/// viewer client is expected to gate display on it. This endpoint only
/// reverses the encoding.
pub async fn view(Query(params): Query<ViewerParams>) -> AppResult<String> {
    decode_payload(&params.data).map_err(|e| AppError::BadRequest(e.to_string()))
}
