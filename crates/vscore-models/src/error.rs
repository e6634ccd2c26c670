//! Model-level error types.

use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("{0}")]
    InvalidVideoId(String),

    #[error("Unknown scoring model: {0}")]
    UnknownScoringModel(String),
}

impl ModelError {
    pub fn invalid_video_id(msg: impl Into<String>) -> Self {
        Self::InvalidVideoId(msg.into())
    }
}
