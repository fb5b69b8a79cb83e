//! Date types for meeting resolution.
//!
//! This module provides [`CalendarDate`], a day on the local calendar compared
//! by year, month and day only, and [`CutoffHour`], the local hour after which
//! a same-day meeting stops counting as "today".

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A day on the local wall-clock calendar.
///
/// Equality, ordering and hashing only ever look at the year, month and day.
/// The month is exposed both zero-based ([`CalendarDate::month0`]) and
/// one-based ([`CalendarDate::month`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from a year, a zero-based month (0-11) and a day.
    ///
    /// Returns `None` if the combination is not a real calendar day.
    pub fn from_ymd0(year: i32, month0: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month0.checked_add(1)?, day).map(Self)
    }

    /// Creates a date from a year, a one-based month (1-12) and a day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Returns the calendar day of a local instant, dropping the time.
    pub fn of(instant: NaiveDateTime) -> Self {
        Self(instant.date())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Zero-based month (0 = January).
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    /// One-based month (1 = January).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the underlying chrono date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Combines this date with the start of the given hour.
    pub fn at_hour(&self, hour: CutoffHour) -> NaiveDateTime {
        self.0.and_time(hour.as_time())
    }

    /// Checks if a local instant falls on this calendar day.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant.date() == self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// The local hour (0-23) after which a same-day meeting is no longer upcoming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CutoffHour(u8);

impl CutoffHour {
    /// Cutoff used when none is configured: 21:00, two hours after the
    /// meeting starts.
    pub const DEFAULT: Self = Self(21);

    /// Creates a cutoff hour, rejecting values above 23.
    pub fn new(hour: u8) -> Result<Self, ConfigError> {
        if hour < 24 {
            Ok(Self(hour))
        } else {
            Err(ConfigError::InvalidCutoffHour(hour))
        }
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.0)
    }

    /// The cutoff as a time of day (minutes and seconds are zero).
    pub fn as_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), 0, 0).expect("cutoff hour is below 24")
    }
}

impl Default for CutoffHour {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for CutoffHour {
    type Error = ConfigError;

    fn try_from(hour: u8) -> Result<Self, Self::Error> {
        Self::new(hour)
    }
}

impl From<CutoffHour> for u8 {
    fn from(hour: CutoffHour) -> Self {
        hour.0
    }
}

impl fmt::Display for CutoffHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}
