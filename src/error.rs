//! LearnAble Error Types
//!
//! Centralized error handling for the crate.

use thiserror::Error;

/// Central error type for LearnAble
#[derive(Error, Debug)]
pub enum LearnError {
    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("Speech capture error: {0}")]
    Capture(String),

    #[error("Usage store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for LearnAble operations
pub type LearnResult<T> = Result<T, LearnError>;
