//! Merge error types.

use icalmerge_index::IndexError;
use thiserror::Error;

/// Result type for merge operations.
pub type MergeResult<T> = Result<T, MergeError>;

/// Errors that abort a merge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    /// An earlier error already aborted this merge.
    #[error("merge was aborted by an earlier error")]
    Aborted,
}
