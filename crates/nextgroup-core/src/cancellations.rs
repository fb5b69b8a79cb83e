//! Ad-hoc meeting cancellations.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::date::CalendarDate;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// The set of dates on which the meeting does not take place.
///
/// Membership is decided by calendar day only; any time of day attached to a
/// configured entry is dropped when the registry is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancellationRegistry {
    dates: BTreeSet<CalendarDate>,
}

impl CancellationRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from configured entries.
    ///
    /// Entries are `YYYY-MM-DD`, optionally followed by a time. Entries that
    /// cannot be parsed as a real calendar day are logged and skipped.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dates = entries
            .into_iter()
            .filter_map(|entry| {
                let entry = entry.as_ref();
                let parsed = parse_entry(entry);
                if parsed.is_none() {
                    warn!(entry, "ignoring malformed cancellation entry");
                }
                parsed
            })
            .collect();

        Self { dates }
    }

    /// Returns `true` if the meeting on `date` is cancelled.
    pub fn is_cancelled(&self, date: CalendarDate) -> bool {
        self.dates.contains(&date)
    }

    /// Iterates over cancelled dates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.dates.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<CalendarDate> for CancellationRegistry {
    fn from_iter<T: IntoIterator<Item = CalendarDate>>(iter: T) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

fn parse_entry(entry: &str) -> Option<CalendarDate> {
    let entry = entry.trim();
    if let Ok(date) = NaiveDate::parse_from_str(entry, DATE_FORMAT) {
        return Some(date.into());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(entry, fmt).ok())
        .map(CalendarDate::of)
}
