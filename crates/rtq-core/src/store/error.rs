use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("queue record unreadable at {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },

    #[error("queue record corrupt at {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("failed to write queue record at {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    #[error("failed to delete queue record at {}: {reason}", path.display())]
    Delete { path: PathBuf, reason: String },
}
