//! Store error types

use thiserror::Error;

use crate::index::IndexError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Payload is not well-formed JSON
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// A record with this id already exists
    ///
    /// Ids are immutable once indexed; without deletion semantics a
    /// replacement could never be unwound from the indexes.
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    /// An index invariant failure surfaced through a store query
    #[error(transparent)]
    Index(#[from] IndexError),
}
