//! Modification timestamps.
//!
//! A [`Timestamp`] is a UTC instant with one-second resolution, which is
//! the resolution of the iCalendar `LAST-MODIFIED` property. The textual
//! form is the iCalendar basic DATE-TIME, `YYYYMMDDTHHMMSSZ`, so only years
//! 0000 through 9999 are representable.

use crate::Error;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ICAL_FORMAT: &str = "%Y%m%dT%H%M%S";

/// A UTC instant between 0000-01-01T00:00:00Z and 9999-12-31T23:59:60Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Earliest representable instant, 0000-01-01T00:00:00Z.
    pub const MIN_UNIX: i64 = -62_167_219_200;
    /// Latest representable whole second, 9999-12-31T23:59:59Z.
    pub const MAX_UNIX: i64 = 253_402_300_799;

    /// Creates a timestamp from seconds since the Unix epoch.
    ///
    /// Fails outside [`MIN_UNIX`](Self::MIN_UNIX)..=[`MAX_UNIX`](Self::MAX_UNIX),
    /// where the iCalendar text form has no four-digit year.
    pub fn from_unix(unix_seconds: i64) -> Result<Self, Error> {
        if !(Self::MIN_UNIX..=Self::MAX_UNIX).contains(&unix_seconds) {
            return Err(Error::InvalidTimestamp(format!(
                "{unix_seconds} is outside years 0000-9999"
            )));
        }
        DateTime::<Utc>::from_timestamp(unix_seconds, 0)
            .map(Self)
            .ok_or_else(|| Error::InvalidTimestamp(format!("{unix_seconds} out of range")))
    }

    /// Returns the seconds since the Unix epoch. A leap second reports the
    /// second before it.
    #[must_use]
    pub fn unix_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    /// Returns the underlying UTC date-time.
    #[must_use]
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Builds a timestamp from calendar fields. A `second` of 60 is a leap
    /// second.
    pub fn from_utc(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, Error> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            Error::InvalidTimestamp(format!("no such date {year:04}-{month:02}-{day:02}"))
        })?;
        let naive = if second == 60 {
            date.and_hms_milli_opt(hour, minute, 59, 1_000)
        } else {
            date.and_hms_opt(hour, minute, second)
        }
        .ok_or_else(|| {
            Error::InvalidTimestamp(format!(
                "time {hour:02}:{minute:02}:{second:02} out of range"
            ))
        })?;
        Self::from_naive(naive)
    }

    /// Parses the iCalendar basic form `YYYYMMDDTHHMMSS[Z]`.
    ///
    /// Values without the trailing `Z` (floating time) are read as UTC.
    pub fn parse_ical(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        let body = s.strip_suffix('Z').unwrap_or(s);
        let well_formed = body.len() == 15
            && body
                .bytes()
                .enumerate()
                .all(|(i, b)| if i == 8 { b == b'T' } else { b.is_ascii_digit() });
        if !well_formed {
            return Err(Error::InvalidTimestamp(format!(
                "expected YYYYMMDDTHHMMSSZ, got {s:?}"
            )));
        }

        let naive = NaiveDateTime::parse_from_str(body, ICAL_FORMAT)
            .map_err(|e| Error::InvalidTimestamp(format!("{s:?}: {e}")))?;
        Self::from_naive(naive)
    }

    fn from_naive(naive: NaiveDateTime) -> Result<Self, Error> {
        if !(0..=9999).contains(&naive.year()) {
            return Err(Error::InvalidTimestamp(format!(
                "year {} is outside 0000-9999",
                naive.year()
            )));
        }
        Ok(Self(naive.and_utc()))
    }

    /// Returns true if this timestamp is strictly earlier than the other.
    #[must_use]
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns true if this timestamp is strictly later than the other.
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Z", self.0.format(ICAL_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_ical(s)
    }
}

impl TryFrom<String> for Timestamp {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_ical(&value)
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.to_string()
    }
}
