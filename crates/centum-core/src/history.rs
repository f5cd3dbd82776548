//! The calculation history log.
//!
//! Newest-first, capped at [`HISTORY_CAP`] entries, mirrored to storage on
//! every mutation. Entries are never edited in place: the log grows by
//! prepend-and-cap and shrinks only by clearing as a whole.

use crate::error::CentumResult;
use crate::storage::{HISTORY_KEY, StorageProvider};
use centum_types::CalculationResult;
use std::sync::Arc;
use tracing::{debug, warn};

/// Maximum number of history entries kept and persisted.
pub const HISTORY_CAP: usize = 10;

/// Capped, persisted, newest-first log of past calculation results.
pub struct HistoryLog {
    entries: Vec<CalculationResult>,
    storage: Arc<dyn StorageProvider>,
}

impl HistoryLog {
    /// Load the persisted snapshot. A malformed or unreadable snapshot is
    /// logged and discarded; the log starts empty in that case.
    pub fn load(storage: Arc<dyn StorageProvider>) -> Self {
        let entries = match Self::read_snapshot(storage.as_ref()) {
            Ok(mut entries) => {
                // A foreign snapshot may exceed the cap; trim on the way in.
                entries.truncate(HISTORY_CAP);
                debug!(count = entries.len(), "Loaded calculation history");
                entries
            }
            Err(err) => {
                warn!(error = %err, "Discarding unreadable history snapshot");
                Vec::new()
            }
        };
        Self { entries, storage }
    }

    fn read_snapshot(storage: &dyn StorageProvider) -> CentumResult<Vec<CalculationResult>> {
        match storage.get(HISTORY_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Prepend a result, trim to the cap, and persist the full snapshot.
    pub fn record(&mut self, result: CalculationResult) -> CentumResult<()> {
        self.entries.insert(0, result);
        self.entries.truncate(HISTORY_CAP);
        self.persist()
    }

    /// Reset to an empty sequence and remove the persisted snapshot
    /// entirely, so a later load starts from nothing.
    pub fn clear(&mut self) -> CentumResult<()> {
        self.entries.clear();
        self.storage.remove(HISTORY_KEY)
    }

    /// The current entries, newest-first.
    pub fn list(&self) -> &[CalculationResult] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> CentumResult<()> {
        let raw = serde_json::to_string(&self.entries)?;
        self.storage.set(HISTORY_KEY, &raw)
    }
}
