use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("action import failed: {0}")]
    ImportFailed(String),

    #[error("retarget failed: {0}")]
    RetargetFailed(String),

    #[error("internal executor error: {0}")]
    Internal(String),
}
