//! Per-merge counters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What happened to every record a merge looked at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeStats {
    /// Sources merged so far.
    pub sources: usize,
    /// Records looked at, across all sources.
    pub records_seen: usize,
    /// Records with a new UID, added to the output.
    pub adopted: usize,
    /// Records that replaced an older record with the same UID.
    pub replaced: usize,
    /// Records discarded for lack of a UID.
    pub dropped_no_identifier: usize,
    /// Records discarded because one side of a UID conflict had no
    /// last-modified time.
    pub dropped_ambiguous_recency: usize,
    /// Records discarded because they were not newer than the indexed one.
    pub dropped_not_newer: usize,
    /// Records without a UID passed through unmerged.
    pub kept_anonymous: usize,
}

impl MergeStats {
    /// Total records discarded for any reason.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped_no_identifier + self.dropped_ambiguous_recency + self.dropped_not_newer
    }

    /// Number of records in the output.
    #[must_use]
    pub fn output_len(&self) -> usize {
        self.adopted + self.kept_anonymous
    }
}

impl fmt::Display for MergeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sources, {} records: {} adopted, {} replaced, {} dropped \
             (no uid {}, unknown recency {}, not newer {}), {} anonymous kept",
            self.sources,
            self.records_seen,
            self.adopted,
            self.replaced,
            self.dropped(),
            self.dropped_no_identifier,
            self.dropped_ambiguous_recency,
            self.dropped_not_newer,
            self.kept_anonymous,
        )
    }
}
