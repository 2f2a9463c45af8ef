use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid batch spec: {0}")]
    InvalidSpec(String),

    #[error("missing field: {0}")]
    MissingField(&'static str),
}

pub type ModelResult<T> = Result<T, ModelError>;
