//! Record model for icalmerge.
//!
//! This crate defines the small surface the merge engine needs from a
//! calendar record, plus a concrete record type usable end-to-end:
//! - [`Record`]: read access to a record's identifier and last-modified time
//! - [`Uid`]: the stable per-event identifier (iCalendar `UID`)
//! - [`Timestamp`]: UTC modification time (iCalendar `LAST-MODIFIED`)
//! - [`CalendarEvent`]: a serde-friendly event record
//!
//! Parsing calendar text and serializing it back are the job of a calendar
//! library; everything here is format-agnostic beyond those two attributes.

mod event;
mod record;
mod timestamp;
mod uid;

pub use event::CalendarEvent;
pub use record::Record;
pub use timestamp::Timestamp;
pub use uid::Uid;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("invalid uid: {0}")]
    InvalidUid(String),
}
