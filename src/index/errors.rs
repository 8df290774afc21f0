//! Index error types
//!
//! The index surface is total: absent keys, empty inputs, and out-of-order
//! range bounds are all valid queries with well-defined (usually empty)
//! results. The single error condition is the defensive invariant check
//! inside the binary search, which no externally valid call can reach.

use std::fmt;

use thiserror::Error;

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;

/// Severity levels for index errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Internal invariant violated; the operation must abort
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Index errors
#[derive(Debug, Clone, Error)]
pub enum IndexError {
    /// Binary search computed a middle index that resolves to no entry
    #[error(
        "SORTDEX_SEARCH_INVARIANT: binary search middle index {index} \
         outside sequence of {len} entries"
    )]
    SearchOutOfRange {
        /// The offending middle index
        index: usize,
        /// Length of the sorted sequence at the time of the search
        len: usize,
    },
}

impl IndexError {
    /// Returns the string error code
    pub fn code(&self) -> &'static str {
        match self {
            IndexError::SearchOutOfRange { .. } => "SORTDEX_SEARCH_INVARIANT",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        Severity::Fatal
    }

    /// Returns whether this error is fatal
    pub fn is_fatal(&self) -> bool {
        true
    }
}
