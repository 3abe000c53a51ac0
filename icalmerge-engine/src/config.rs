//! Merge configuration.

use serde::{Deserialize, Serialize};

/// Default number of distinct UIDs a merge can hold.
pub const DEFAULT_CAPACITY: usize = 2000;

/// What to do with records that have no UID.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnonymousRecords {
    /// Discard them. They cannot be deduplicated.
    #[default]
    Drop,
    /// Pass them through after the deduplicated records, in the order
    /// they were encountered.
    Keep,
}

/// Settings for one merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Expected maximum number of distinct UIDs. The index is sized from
    /// this once and never grows; exceeding it aborts the merge.
    pub capacity: usize,
    pub anonymous: AnonymousRecords,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            anonymous: AnonymousRecords::Drop,
        }
    }
}

impl MergeConfig {
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_anonymous(mut self, anonymous: AnonymousRecords) -> Self {
        self.anonymous = anonymous;
        self
    }
}
