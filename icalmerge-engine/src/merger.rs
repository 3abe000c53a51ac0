//! The merge driver.
//!
//! Every record passes through exactly one decision:
//!
//! ```text
//! no UID ───────────────────────────────▶ dropped (or passed through)
//! UID ─▶ probe index ─┬─ miss ──────────▶ adopted
//!                     └─ hit ─▶ policy ─┬─ replace ─▶ adopted, old released
//!                                       └─ keep ────▶ dropped
//! ```

use icalmerge_index::IdentifierIndex;
use icalmerge_types::Record;
use tracing::{debug, info, warn};

use crate::config::{AnonymousRecords, MergeConfig};
use crate::error::{MergeError, MergeResult};
use crate::policy::{KeepReason, LastModifiedWins, MergePolicy, Resolution};
use crate::stats::MergeStats;

/// Why a record was discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// It had no UID (or an empty one).
    NoIdentifier,
    /// Its UID was taken and one side had no last-modified time.
    AmbiguousRecency,
    /// Its UID was taken by a record at least as recent.
    NotNewer,
}

impl From<KeepReason> for DropReason {
    fn from(reason: KeepReason) -> Self {
        match reason {
            KeepReason::ExistingRecencyUnknown | KeepReason::IncomingRecencyUnknown => {
                DropReason::AmbiguousRecency
            }
            KeepReason::NotNewer => DropReason::NotNewer,
        }
    }
}

/// What the merger did with one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// First record seen with its UID; appended to the output.
    Adopted,
    /// Replaced the record previously held for its UID, in place.
    Replaced,
    /// Had no UID and was passed through unmerged.
    PassedThrough,
    /// Discarded.
    Dropped(DropReason),
}

/// The result of a completed merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome<R> {
    /// Merged records in first-seen order, followed by any anonymous
    /// records that were kept.
    pub records: Vec<R>,
    pub stats: MergeStats,
}

/// Merges records from any number of sources into one deduplicated list.
///
/// The merger owns its index for its whole lifetime. Sources are merged one
/// at a time with [`merge_source`](Self::merge_source) and the result is
/// taken with [`finish`](Self::finish). A fatal error aborts the merge:
/// every later call fails with [`MergeError::Aborted`] and no partial output
/// is returned.
#[derive(Debug)]
pub struct Merger<R, P = LastModifiedWins> {
    config: MergeConfig,
    policy: P,
    index: IdentifierIndex<R>,
    anonymous: Vec<R>,
    stats: MergeStats,
    aborted: bool,
}

impl<R: Record> Merger<R, LastModifiedWins> {
    /// Creates a merger with the default last-modified-wins policy.
    ///
    /// Fails with [`IndexError::Capacity`](icalmerge_index::IndexError::Capacity)
    /// if the index cannot be allocated.
    pub fn new(config: MergeConfig) -> MergeResult<Self> {
        Self::with_policy(config, LastModifiedWins)
    }
}

impl<R: Record, P: MergePolicy<R>> Merger<R, P> {
    /// Creates a merger with a custom conflict policy.
    pub fn with_policy(config: MergeConfig, policy: P) -> MergeResult<Self> {
        let index = IdentifierIndex::with_capacity(config.capacity)?;
        debug!(
            "Created merge index with {} slots (requested {})",
            index.capacity(),
            config.capacity
        );

        Ok(Self {
            config,
            policy,
            index,
            anonymous: Vec::new(),
            stats: MergeStats::default(),
            aborted: false,
        })
    }

    #[must_use]
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Counters for everything merged so far.
    #[must_use]
    pub fn stats(&self) -> &MergeStats {
        &self.stats
    }

    /// Returns true if a fatal error has aborted this merge.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    /// Merges every record of one source, in the source's order.
    pub fn merge_source<I>(&mut self, source: I) -> MergeResult<()>
    where
        I: IntoIterator<Item = R>,
    {
        if self.aborted {
            return Err(MergeError::Aborted);
        }
        self.stats.sources += 1;

        for record in source {
            self.merge_record(record)?;
        }
        Ok(())
    }

    /// Merges a single record.
    pub fn merge_record(&mut self, record: R) -> MergeResult<Disposition> {
        if self.aborted {
            return Err(MergeError::Aborted);
        }
        self.stats.records_seen += 1;

        let Some(key) = record.merge_key().map(str::to_owned) else {
            return Ok(self.handle_anonymous(record));
        };

        let resolution = self
            .index
            .find(&key)
            .map(|existing| self.policy.resolve(existing, &record));

        match resolution {
            None => {
                self.store(&key, record)?;
                self.stats.adopted += 1;
                debug!("{}: added", key);
                Ok(Disposition::Adopted)
            }
            Some(Resolution::Replace) => {
                let superseded = self.store(&key, record)?;
                drop(superseded);
                self.stats.replaced += 1;
                debug!("{}: replaced", key);
                Ok(Disposition::Replaced)
            }
            Some(Resolution::Keep(reason)) => {
                if reason.is_ambiguous() {
                    self.stats.dropped_ambiguous_recency += 1;
                } else {
                    self.stats.dropped_not_newer += 1;
                }
                debug!("{}: ignored ({:?})", key, reason);
                Ok(Disposition::Dropped(reason.into()))
            }
        }
    }

    /// Writes `record` into the index. Any index failure aborts the merge.
    fn store(&mut self, key: &str, record: R) -> MergeResult<Option<R>> {
        self.index.store(key, record).map_err(|err| {
            self.aborted = true;
            warn!(
                "Aborting merge at {}: {} ({} distinct UIDs)",
                key,
                err,
                self.index.len()
            );
            MergeError::from(err)
        })
    }

    fn handle_anonymous(&mut self, record: R) -> Disposition {
        match self.config.anonymous {
            AnonymousRecords::Drop => {
                self.stats.dropped_no_identifier += 1;
                debug!("record without UID dropped");
                Disposition::Dropped(DropReason::NoIdentifier)
            }
            AnonymousRecords::Keep => {
                self.anonymous.push(record);
                self.stats.kept_anonymous += 1;
                debug!("record without UID passed through");
                Disposition::PassedThrough
            }
        }
    }

    /// Ends the merge and hands over the merged records.
    pub fn finish(self) -> MergeResult<MergeOutcome<R>> {
        if self.aborted {
            return Err(MergeError::Aborted);
        }

        let mut records = self.index.into_records();
        records.extend(self.anonymous);
        info!("Merge complete: {}", self.stats);

        Ok(MergeOutcome {
            records,
            stats: self.stats,
        })
    }
}

/// Merges `sources` in order with the default policy.
///
/// Either every source is merged or an error is returned; there is no
/// partial result.
pub fn merge_all<R, S, I>(config: MergeConfig, sources: S) -> MergeResult<MergeOutcome<R>>
where
    R: Record,
    S: IntoIterator<Item = I>,
    I: IntoIterator<Item = R>,
{
    let mut merger = Merger::new(config)?;
    for source in sources {
        merger.merge_source(source)?;
    }
    merger.finish()
}
