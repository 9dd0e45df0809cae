use std::path::PathBuf;

use formqr_qr::EcLevel;

/// Shared password for the admin surface when `ADMIN_PASSWORD` is unset.
///
/// Carried over from the original deployment. A plaintext shared literal is
/// a known weakness of this design, kept deliberately: the admin gate is a
/// convenience latch, not an authentication system.
const DEFAULT_ADMIN_PASSWORD: &str = "1922K1396s*";

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Public origin used to build viewer URLs embedded in QR codes.
    pub public_origin: String,
    /// Base URL of the summarization service.
    pub summarizer_url: String,
    /// Shared admin password, compared in plaintext.
    pub admin_password: String,
    /// Maximum payload size (characters) for direct QR encoding.
    pub overflow_threshold: usize,
    /// QR error correction level.
    pub qr_ec_level: EcLevel,
    /// Path of the JSON history document.
    pub history_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                   |
    /// |------------------------|---------------------------|
    /// | `HOST`                 | `0.0.0.0`                 |
    /// | `PORT`                 | `3000`                    |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                      |
    /// | `PUBLIC_ORIGIN`        | `http://localhost:3000`   |
    /// | `SUMMARIZER_URL`       | `http://localhost:8870`   |
    /// | `ADMIN_PASSWORD`       | (built-in literal)        |
    /// | `OVERFLOW_THRESHOLD`   | `2000`                    |
    /// | `QR_EC_LEVEL`          | `medium`                  |
    /// | `HISTORY_PATH`         | `./data/history.json`     |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_origin =
            std::env::var("PUBLIC_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".into());

        let summarizer_url =
            std::env::var("SUMMARIZER_URL").unwrap_or_else(|_| "http://localhost:8870".into());

        let admin_password =
            std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.into());

        let overflow_threshold: usize = std::env::var("OVERFLOW_THRESHOLD")
            .unwrap_or_else(|_| formqr_core::overflow::MAX_DIRECT_CHARS.to_string())
            .parse()
            .expect("OVERFLOW_THRESHOLD must be a valid usize");

        let qr_ec_level = std::env::var("QR_EC_LEVEL")
            .map(|s| EcLevel::parse(&s).expect("QR_EC_LEVEL must be one of l/m/q/h"))
            .unwrap_or_default();

        let history_path: PathBuf = std::env::var("HISTORY_PATH")
            .unwrap_or_else(|_| "./data/history.json".into())
            .into();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_origin,
            summarizer_url,
            admin_password,
            overflow_threshold,
            qr_ec_level,
            history_path,
        }
    }
}
