//! Merge engine for icalmerge.
//!
//! Folds events from several calendars into one, keeping at most one event
//! per UID:
//!
//! - [`Merger`] walks each source in order and decides the fate of every
//!   record: adopted, replacing an earlier one, or dropped
//! - [`MergePolicy`] settles conflicts between two records with the same
//!   UID; [`LastModifiedWins`] is the default
//! - [`MergeConfig`] sets the index capacity and what happens to records
//!   without a UID
//! - [`MergeStats`] counts every decision so dropped data can be audited
//!
//! Output order is first-seen order: a record that wins a conflict takes
//! over the position of the one it replaces.

mod config;
mod error;
mod merger;
mod policy;
mod stats;

pub use config::{AnonymousRecords, MergeConfig, DEFAULT_CAPACITY};
pub use error::{MergeError, MergeResult};
pub use merger::{merge_all, Disposition, DropReason, MergeOutcome, Merger};
pub use policy::{KeepReason, LastModifiedWins, MergePolicy, Resolution};
pub use stats::MergeStats;
