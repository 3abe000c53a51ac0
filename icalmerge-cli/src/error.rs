//! CLI error types and their process exit codes.

use std::io;
use std::path::PathBuf;

use icalmerge_engine::MergeError;
use thiserror::Error;

/// Bad command line.
pub const EXIT_USAGE: u8 = 2;
/// An input calendar or config file could not be decoded.
pub const EXIT_PARSE: u8 = 4;
/// A file could not be opened, read, created or written.
pub const EXIT_FILE_IO: u8 = 5;
/// The merge index could not be created or ran out of room.
pub const EXIT_INDEX: u8 = 7;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("{action} {}: {source}", path.display())]
    FileIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parsing {what} {}: {source}", path.display())]
    Parse {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("creating merge index: {0}")]
    Index(#[source] MergeError),

    #[error("merging {}: {source}", path.display())]
    Merge {
        path: PathBuf,
        #[source]
        source: MergeError,
    },
}

impl CliError {
    pub(crate) fn file_io(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::FileIo { action, path, source }
    }

    /// The status the `icalmerge` binary exits with for this error.
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Usage(_) => EXIT_USAGE,
            Self::Parse { .. } => EXIT_PARSE,
            Self::FileIo { .. } => EXIT_FILE_IO,
            Self::Index(_) | Self::Merge { .. } => EXIT_INDEX,
        }
    }
}
