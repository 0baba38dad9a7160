//! Error types for vocab-core.

use thiserror::Error;

/// Errors raised by the persisted word store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access word store: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode word store: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors raised when driving a study session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no words available to study")]
    NoWords,

    #[error(transparent)]
    Store(#[from] StoreError),
}
