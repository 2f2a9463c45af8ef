use std::path::PathBuf;

use thiserror::Error;

use crate::{host::HostError, store::StoreError};
use rtq_model::ModelError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("empty input set: no *.{suffix} files in {}", dir.display())]
    EmptyInputSet { dir: PathBuf, suffix: String },

    #[error("input directory unreadable: {}: {reason}", dir.display())]
    InputDirUnreadable { dir: PathBuf, reason: String },

    #[error("output directory: {0}")]
    OutputDir(String),

    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("queue store error: {0}")]
    Store(#[from] StoreError),

    #[error("host error: {0}")]
    Host(#[from] HostError),
}
