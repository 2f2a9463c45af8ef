//! Durable storage for the job queue.
//!
//! The record on disk is the sole source of truth for batch progress: every
//! resume cycle starts by reading it and nothing may be remembered outside
//! of it. Saves are atomic replacements so a crash mid-write can never
//! leave a torn record behind.
mod error;
pub use error::StoreError;

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, trace};

use rtq_model::{QUEUE_FILE_NAME, Queue};

/// Handle to the durable queue record at a fixed location.
///
/// Behavior:
/// - a missing record is the "no run in progress" signal, not an error;
/// - an existing but unreadable/corrupt record is surfaced as an error and
///   never deleted, so a human can inspect or repair it;
/// - [`QueueStore::save`] writes the whole record to a temporary file in
///   the same directory and renames it into place.
#[derive(Debug, Clone)]
pub struct QueueStore {
    path: PathBuf,
}

impl QueueStore {
    /// Create a store handle for an explicit record path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store handle for the well-known record inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(QUEUE_FILE_NAME),
        }
    }

    /// Location of the record on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the record.
    ///
    /// `Ok(None)` means no record exists (no run in progress). Any other
    /// failure on an existing record is fatal to the run and leaves the
    /// record untouched.
    pub fn load(&self) -> Result<Option<Queue>, StoreError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                trace!(path = %self.path.display(), "no queue record on disk");
                return Ok(None);
            }
            Err(e) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    reason: e.to_string(),
                });
            }
        };

        let queue = serde_json::from_str::<Queue>(&raw).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        trace!(path = %self.path.display(), jobs = queue.len(), "queue record loaded");
        Ok(Some(queue))
    }

    /// Replace the record atomically with the given queue.
    pub fn save(&self, queue: &Queue) -> Result<(), StoreError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let payload =
            serde_json::to_vec_pretty(queue).map_err(|e| self.write_error(e.to_string()))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| self.write_error(e.to_string()))?;
        tmp.write_all(&payload)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| self.write_error(e.to_string()))?;
        tmp.persist(&self.path)
            .map_err(|e| self.write_error(e.to_string()))?;

        debug!(path = %self.path.display(), jobs = queue.len(), "queue record saved");
        Ok(())
    }

    /// Remove the record, signaling batch completion.
    ///
    /// A record that is already gone is not an error.
    pub fn delete(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "queue record deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Delete {
                path: self.path.clone(),
                reason: e.to_string(),
            }),
        }
    }

    fn write_error(&self, reason: String) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rtq_model::Job;

    fn mk_queue(n: usize) -> Queue {
        Queue::from_jobs(
            (0..n)
                .map(|i| {
                    Job::new(
                        format!("/chars/c{i}.blend"),
                        format!("/actions/a{i}.fbx"),
                        format!("/out/c{i}_a{i}.blend"),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn missing_record_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = QueueStore::in_dir(dir.path());

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let store = QueueStore::in_dir(dir.path());
        let queue = mk_queue(3);

        store.save(&queue).unwrap();
        let loaded = store.load().unwrap().expect("record must exist");
        assert_eq!(loaded, queue);
    }

    #[test]
    fn save_overwrites_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = QueueStore::in_dir(dir.path());

        store.save(&mk_queue(4)).unwrap();
        let mut shorter = mk_queue(4);
        shorter.pop_front();
        store.save(&shorter).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded, shorter);
    }

    #[test]
    fn corrupt_record_is_an_error_and_survives() {
        let dir = tempfile::tempdir().unwrap();
        let store = QueueStore::in_dir(dir.path());
        std::fs::write(store.path(), b"{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert!(store.path().exists(), "corrupt record must not be deleted");
    }

    #[test]
    fn delete_removes_record_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = QueueStore::in_dir(dir.path());

        store.save(&mk_queue(1)).unwrap();
        store.delete().unwrap();
        assert!(!store.path().exists());

        store.delete().unwrap();
    }

    #[test]
    fn record_is_a_readable_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = QueueStore::in_dir(dir.path());
        store.save(&mk_queue(1)).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.trim_start().starts_with('['));
        assert!(raw.contains("source_environment_path"));
        assert!(raw.contains("action_input_path"));
        assert!(raw.contains("output_path"));
    }
}
