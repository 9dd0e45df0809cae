//! In-memory history store for tests and ephemeral deployments.

use tokio::sync::Mutex;

use formqr_core::history::HistoryEntry;

use crate::{push_capped, HistoryRepository, StoreError, HISTORY_CAPACITY};

/// Volatile history store. Same invariants as the file-backed store, no
/// persistence across restarts.
#[derive(Default)]
pub struct MemoryHistory {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl HistoryRepository for MemoryHistory {
    async fn append(&self, entry: HistoryEntry) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        push_capped(&mut entries, entry, HISTORY_CAPACITY);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        Ok(self.entries.lock().await.clone())
    }
}
