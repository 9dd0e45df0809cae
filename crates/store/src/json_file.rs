//! File-backed history store: one JSON document holding the entry array.
//!
//! Mirrors the single-key storage contract: the whole history lives in one
//! document, read at startup and rewritten on every append. Writes are
//! atomic (temp file + rename) and the read-modify-write cycle runs under
//! a mutex so concurrent appends cannot break the capacity invariant.

use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use formqr_core::history::HistoryEntry;

use crate::{push_capped, HistoryRepository, StoreError, HISTORY_CAPACITY};

/// History store persisted as a single JSON file.
pub struct JsonFileHistory {
    path: PathBuf,
    /// Serializes read-modify-write cycles; the capacity invariant depends
    /// on appends not interleaving.
    write_lock: Mutex<()>,
}

impl JsonFileHistory {
    /// Open (or lazily create) the store at `path`. The parent directory
    /// is created immediately; the file itself appears on first append.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let store = Self {
            path,
            write_lock: Mutex::new(()),
        };
        // Fail fast on unreadable or corrupt existing data.
        store.load().await?;
        Ok(store)
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    async fn save(&self, entries: &[HistoryEntry]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(entries)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        // Write-then-rename keeps a crash from truncating the document.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl HistoryRepository for JsonFileHistory {
    async fn append(&self, entry: HistoryEntry) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        push_capped(&mut entries, entry, HISTORY_CAPACITY);
        self.save(&entries).await?;
        tracing::debug!(count = entries.len(), path = %self.path.display(), "History appended");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<HistoryEntry>, StoreError> {
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::entry;

    fn temp_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("history.json")
    }

    #[tokio::test]
    async fn starts_empty_when_the_file_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileHistory::open(temp_path(&dir)).await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn appends_persist_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);

        let store = JsonFileHistory::open(&path).await.unwrap();
        store.append(entry(1)).await.unwrap();
        store.append(entry(2)).await.unwrap();
        drop(store);

        let reopened = JsonFileHistory::open(&path).await.unwrap();
        let listed = reopened.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, "entry-2");
    }

    #[tokio::test]
    async fn cap_holds_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileHistory::open(temp_path(&dir)).await.unwrap();
        for n in 0..51 {
            store.append(entry(n)).await.unwrap();
        }

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), HISTORY_CAPACITY);
        assert_eq!(listed[0].id, "entry-50");
        assert!(listed.iter().all(|e| e.id != "entry-0"));
    }

    #[tokio::test]
    async fn corrupt_document_surfaces_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir);
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        assert!(matches!(
            JsonFileHistory::open(&path).await,
            Err(StoreError::Corrupt(_))
        ));
    }

    #[tokio::test]
    async fn missing_parent_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/history.json");
        let store = JsonFileHistory::open(&path).await.unwrap();
        store.append(entry(1)).await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 1);
    }
}
