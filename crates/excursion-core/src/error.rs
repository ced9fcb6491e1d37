//! Error types for excursion-core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExcursionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Data(String),
}

impl ExcursionError {
    /// Create a configuration error from any message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a data document error from any message.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ExcursionError>;
