//! REST client for the summarization service.
//!
//! One endpoint: `POST {base}/summarize` with the raw serialized text,
//! returning a shorter semantic summary. The pipeline performs exactly one
//! call per oversized submission: no retries, and a failure surfaces
//! immediately to the user.

use serde::{Deserialize, Serialize};

/// HTTP client for a single summarization service instance.
pub struct SummarizerClient {
    client: reqwest::Client,
    base_url: String,
}

/// Request body for the `/summarize` endpoint.
#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    text: &'a str,
}

/// Successful response from the `/summarize` endpoint.
#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    summary: String,
}

/// Errors from the summarization service layer.
#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Summarizer error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl SummarizerClient {
    /// Create a new client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://host:8870`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Base HTTP URL of the service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Summarize `text` into a shorter semantic summary.
    ///
    /// Sends a single `POST /summarize` request. The caller decides what to
    /// do with the candidate summary; this layer never substitutes it into
    /// a payload on its own.
    pub async fn summarize(&self, text: &str) -> Result<String, SummarizerError> {
        let response = self
            .client
            .post(format!("{}/summarize", self.base_url))
            .json(&SummarizeRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(SummarizerError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed = response.json::<SummarizeResponse>().await?;
        tracing::debug!(
            input_chars = text.chars().count(),
            summary_chars = parsed.summary.chars().count(),
            "Summarization succeeded",
        );
        Ok(parsed.summary)
    }
}
