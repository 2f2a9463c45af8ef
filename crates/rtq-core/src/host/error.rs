use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("environment file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("load failed for {}: {reason}", path.display())]
    LoadFailed { path: PathBuf, reason: String },

    #[error("save failed for {}: {reason}", path.display())]
    SaveFailed { path: PathBuf, reason: String },

    #[error("no environment is currently loaded")]
    NoEnvironment,

    #[error("host backend error: {0}")]
    Backend(String),
}
