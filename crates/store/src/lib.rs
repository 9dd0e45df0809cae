//! History persistence.
//!
//! [`HistoryRepository`] abstracts the storage medium so the pipeline never
//! touches files directly: [`JsonFileHistory`] keeps a single JSON document
//! on disk (the production default), [`MemoryHistory`] backs tests and
//! ephemeral deployments. Both enforce the same invariants: at most
//! [`HISTORY_CAPACITY`] entries, newest first, silent tail truncation.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileHistory;
pub use memory::MemoryHistory;

use formqr_core::history::HistoryEntry;

/// Maximum number of retained history entries.
pub const HISTORY_CAPACITY: usize = 50;

/// Errors from the history store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed. Surfaced to the
    /// caller, never swallowed.
    #[error("History storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document is not valid JSON for a history list.
    #[error("History storage is corrupt: {0}")]
    Corrupt(String),
}

/// Append-only, capacity-bounded record of generated codes.
#[async_trait::async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Insert an entry at the head, truncating past [`capacity`](Self::capacity).
    async fn append(&self, entry: HistoryEntry) -> Result<(), StoreError>;

    /// All entries, newest first.
    async fn list(&self) -> Result<Vec<HistoryEntry>, StoreError>;

    /// Maximum number of retained entries.
    fn capacity(&self) -> usize {
        HISTORY_CAPACITY
    }
}

/// Insert at the head and truncate to `capacity`. Shared by both
/// implementations so the cap invariant has a single definition.
pub(crate) fn push_capped(entries: &mut Vec<HistoryEntry>, entry: HistoryEntry, capacity: usize) {
    entries.insert(0, entry);
    entries.truncate(capacity);
}

#[cfg(test)]
pub(crate) mod test_support {
    use formqr_core::history::HistoryEntry;
    use formqr_core::template::TemplateId;
    use indexmap::IndexMap;

    /// A minimal entry whose id embeds `n` for ordering assertions.
    pub fn entry(n: usize) -> HistoryEntry {
        let timestamp = chrono::DateTime::from_timestamp(1_700_000_000 + n as i64, 0).unwrap();
        HistoryEntry {
            id: format!("entry-{n}"),
            timestamp,
            qr_data_url: "data:image/png;base64,AAAA".to_string(),
            form_type: TemplateId::ContactForm,
            full_name: Some(format!("Person {n}")),
            fields: IndexMap::new(),
        }
    }
}
