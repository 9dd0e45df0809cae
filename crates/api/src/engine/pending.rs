//! Parked submissions awaiting a summary decision.

use std::collections::HashMap;
use std::sync::Mutex;

use formqr_core::types::Timestamp;
use formqr_core::values::FormValues;
use uuid::Uuid;

/// A submission whose payload exceeded the size limit, held until the user
/// accepts or rejects the candidate summary.
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub values: FormValues,
    pub summary: String,
    pub created_at: Timestamp,
}

/// In-memory map of parked submissions, keyed by a one-time id.
///
/// Entries are consumed on resolution; a process restart discards them,
/// which simply returns those submissions to the editing state.
#[derive(Default)]
pub struct PendingStore {
    inner: Mutex<HashMap<Uuid, PendingSubmission>>,
}

impl PendingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park a submission and return its decision id.
    pub fn insert(&self, values: FormValues, summary: String) -> Uuid {
        let id = Uuid::new_v4();
        let parked = PendingSubmission {
            values,
            summary,
            created_at: chrono::Utc::now(),
        };
        self.inner
            .lock()
            .expect("pending store lock poisoned")
            .insert(id, parked);
        id
    }

    /// Remove and return a parked submission.
    pub fn take(&self, id: Uuid) -> Option<PendingSubmission> {
        self.inner
            .lock()
            .expect("pending store lock poisoned")
            .remove(&id)
    }

    /// Number of submissions currently awaiting a decision.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("pending store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
