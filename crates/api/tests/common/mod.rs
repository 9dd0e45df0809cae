//! Shared helpers for the API integration tests.
//!
//! Tests run against the exact middleware stack production uses (via
//! [`build_app_router`]) with an in-memory history store and, where a test
//! needs the summarizer, a stub service bound to a loopback listener.

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use tower::ServiceExt;

use formqr_api::config::ServerConfig;
use formqr_api::router::build_app_router;
use formqr_api::state::AppState;
use formqr_store::MemoryHistory;
use formqr_summarizer::SummarizerClient;

/// Password used by [`test_config`] for the admin gate.
pub const TEST_ADMIN_PASSWORD: &str = "test-admin-password";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(summarizer_url: String) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        public_origin: "http://localhost:3000".to_string(),
        summarizer_url,
        admin_password: TEST_ADMIN_PASSWORD.to_string(),
        overflow_threshold: 2000,
        qr_ec_level: formqr_qr::EcLevel::Medium,
        history_path: PathBuf::from("unused-in-tests.json"),
    }
}

/// Build the full application router with all middleware layers, backed by
/// an in-memory history store.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(summarizer_url: String) -> Router {
    let config = test_config(summarizer_url);
    let state = AppState::new(
        config.clone(),
        Arc::new(MemoryHistory::new()),
        SummarizerClient::new(config.summarizer_url.clone()),
    );
    build_app_router(state, &config)
}

/// Convenience for tests that never reach the summarizer.
pub fn build_app() -> Router {
    build_test_app("http://127.0.0.1:9".to_string())
}

/// Spawn a stub summarization service on a loopback listener.
///
/// `summary` of `Ok(text)` answers every request with that summary;
/// `Err(status)` answers with the given error status and a plain body.
/// Returns the base URL to hand to the client under test.
pub async fn spawn_stub_summarizer(summary: Result<String, StatusCode>) -> String {
    let app = Router::new().route(
        "/summarize",
        post(move |Json(_req): Json<serde_json::Value>| {
            let summary = summary.clone();
            async move {
                match summary {
                    Ok(text) => (
                        StatusCode::OK,
                        Json(serde_json::json!({ "summary": text })),
                    )
                        .into_response(),
                    Err(status) => (status, "summarizer unavailable").into_response(),
                }
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub summarizer");
    let addr = listener.local_addr().expect("stub summarizer addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub summarizer");
    });
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
    )
    .await
    .expect("response")
}

/// POST with the admin password header attached.
pub async fn post_json_admin(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-admin-password", TEST_ADMIN_PASSWORD)
            .body(Body::from(body.to_string()))
            .expect("request"),
    )
    .await
    .expect("response")
}

/// GET with the admin password header attached.
pub async fn get_admin(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .header("x-admin-password", TEST_ADMIN_PASSWORD)
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}

/// DELETE with the admin password header attached.
pub async fn delete_admin(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header("x-admin-password", TEST_ADMIN_PASSWORD)
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

/// Collect a response body as text.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// A fully valid contactForm submission body.
pub fn valid_contact_form() -> serde_json::Value {
    serde_json::json!({
        "template": "contactForm",
        "values": {
            "password": "secret1",
            "name": "Jane Doe",
            "email": "jane@x.com",
            "phone": "+19876543210",
            "subject": "Hi",
            "message": "1234567890",
        }
    })
}
