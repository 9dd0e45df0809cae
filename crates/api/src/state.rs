use std::sync::Arc;

use tokio::sync::Mutex;

use formqr_core::admin::TemplateWorkingCopy;
use formqr_store::HistoryRepository;
use formqr_summarizer::SummarizerClient;

use crate::config::ServerConfig;
use crate::engine::PendingStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (threshold, EC level, origins, admin password).
    pub config: Arc<ServerConfig>,
    /// History store (JSON file in production, in-memory in tests).
    pub history: Arc<dyn HistoryRepository>,
    /// Client for the external summarization service.
    pub summarizer: Arc<SummarizerClient>,
    /// Submissions parked on a summary decision.
    pub pending: Arc<PendingStore>,
    /// Admin working copy of the template list (process-local).
    pub admin_templates: Arc<Mutex<TemplateWorkingCopy>>,
}

impl AppState {
    /// Assemble state from its services.
    pub fn new(
        config: ServerConfig,
        history: Arc<dyn HistoryRepository>,
        summarizer: SummarizerClient,
    ) -> Self {
        Self {
            config: Arc::new(config),
            history,
            summarizer: Arc::new(summarizer),
            pending: Arc::new(PendingStore::new()),
            admin_templates: Arc::new(Mutex::new(TemplateWorkingCopy::new())),
        }
    }
}
