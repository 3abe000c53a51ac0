//! The read-only view the merge engine takes of a record.

use crate::Timestamp;

/// Access to the two attributes the merge engine consumes.
///
/// Everything else about a record is opaque to the engine. Implement this
/// for whatever event type the calendar library hands out.
pub trait Record {
    /// The record's stable identifier, if it has one.
    fn identifier(&self) -> Option<&str>;

    /// When the record was last modified, if known.
    fn last_modified(&self) -> Option<Timestamp>;

    /// Returns the identifier only when it is present and non-empty.
    ///
    /// An empty identifier cannot key anything, so it is treated exactly
    /// like a missing one.
    fn merge_key(&self) -> Option<&str> {
        self.identifier().filter(|id| !id.is_empty())
    }
}

impl<R: Record + ?Sized> Record for Box<R> {
    fn identifier(&self) -> Option<&str> {
        (**self).identifier()
    }

    fn last_modified(&self) -> Option<Timestamp> {
        (**self).last_modified()
    }
}
