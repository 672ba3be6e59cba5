use thiserror::Error;

/// Error type covering the crate's fallible boundaries.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Invalid reference: {0}")]
    InvalidRef(String),
}
