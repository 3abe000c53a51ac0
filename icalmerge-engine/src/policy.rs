//! Conflict resolution between two records sharing a UID.

use icalmerge_types::Record;
use std::cmp::Ordering;

/// Why the record already in the index was kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepReason {
    /// The indexed record has no last-modified time.
    ExistingRecencyUnknown,
    /// The incoming record has no last-modified time.
    IncomingRecencyUnknown,
    /// The incoming record is older than, or as old as, the indexed one.
    NotNewer,
}

impl KeepReason {
    /// True when the decision was forced by a missing timestamp rather than
    /// by comparing two.
    #[must_use]
    pub fn is_ambiguous(self) -> bool {
        !matches!(self, KeepReason::NotNewer)
    }
}

/// Decision for an incoming record whose UID is already indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The incoming record takes over; the indexed one is released.
    Replace,
    /// The indexed record stays; the incoming one is discarded.
    Keep(KeepReason),
}

/// Decides which of two records with the same UID survives.
pub trait MergePolicy<R> {
    fn resolve(&self, existing: &R, incoming: &R) -> Resolution;
}

impl<R, F> MergePolicy<R> for F
where
    F: Fn(&R, &R) -> Resolution,
{
    fn resolve(&self, existing: &R, incoming: &R) -> Resolution {
        self(existing, incoming)
    }
}

/// Last-writer-wins on `LAST-MODIFIED`.
///
/// The incoming record replaces the indexed one only when both carry a
/// last-modified time and the incoming time is strictly later. A record of
/// unknown recency is never replaced and never replaces anything. Equal
/// times keep the record that was seen first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LastModifiedWins;

impl<R: Record> MergePolicy<R> for LastModifiedWins {
    fn resolve(&self, existing: &R, incoming: &R) -> Resolution {
        let Some(current) = existing.last_modified() else {
            return Resolution::Keep(KeepReason::ExistingRecencyUnknown);
        };
        let Some(candidate) = incoming.last_modified() else {
            return Resolution::Keep(KeepReason::IncomingRecencyUnknown);
        };

        match candidate.cmp(&current) {
            Ordering::Greater => Resolution::Replace,
            Ordering::Less | Ordering::Equal => Resolution::Keep(KeepReason::NotNewer),
        }
    }
}
