//! Calendar event records.
//!
//! A [`CalendarEvent`] carries the two attributes the merge engine reads
//! (`uid` and `last_modified`) plus a handful of descriptive fields and a
//! free-form property bag. The engine never looks past the first two.

use crate::{Record, Timestamp, Uid};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One calendar event (an iCalendar `VEVENT`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// The event's `UID`. Events without one cannot be deduplicated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<Uid>,

    /// The event's `LAST-MODIFIED` time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<Timestamp>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Start time, kept verbatim (`DTSTART` value).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dtstart: Option<String>,

    /// Any other properties, by name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl CalendarEvent {
    /// Creates an empty event with no UID and no modification time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the UID.
    #[must_use]
    pub fn with_uid(mut self, uid: impl Into<Uid>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    /// Sets the modification time.
    #[must_use]
    pub fn with_last_modified(mut self, ts: Timestamp) -> Self {
        self.last_modified = Some(ts);
        self
    }

    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    #[must_use]
    pub fn with_dtstart(mut self, dtstart: impl Into<String>) -> Self {
        self.dtstart = Some(dtstart.into());
        self
    }

    /// Adds or replaces a free-form property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }
}

impl Record for CalendarEvent {
    fn identifier(&self) -> Option<&str> {
        self.uid.as_ref().map(Uid::as_str)
    }

    fn last_modified(&self) -> Option<Timestamp> {
        self.last_modified
    }
}
