//! Error types for the index crate.

use thiserror::Error;

/// Errors raised by [`IdentifierIndex`](crate::IdentifierIndex).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The table could not be allocated at the requested size.
    #[error("cannot allocate an index for {requested} identifiers")]
    Capacity { requested: usize },

    /// Every slot is taken by some other identifier.
    #[error("index is full ({capacity} slots)")]
    TableFull { capacity: usize },
}

/// Result type for index operations.
pub type IndexResult<T> = Result<T, IndexError>;
