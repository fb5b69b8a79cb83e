//! Meeting cadence: the 2nd and 4th occurrence of a weekday in each month.
//!
//! [`occurrences_for_year`] expands the cadence for a whole year into an
//! [`OccurrenceSet`]. The expansion is a pure function of its inputs.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;

/// Which occurrences of the weekday within a month qualify.
pub const ORDINALS: [u32; 2] = [2, 4];

/// The recurring meeting rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cadence {
    /// Day of the week the meeting falls on.
    pub weekday: Weekday,
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            weekday: Weekday::Thu,
        }
    }
}

impl Cadence {
    pub fn new(weekday: Weekday) -> Self {
        Self { weekday }
    }

    /// Expands this cadence for the given year.
    pub fn occurrences(&self, year: i32) -> OccurrenceSet {
        occurrences_for_year(year, self.weekday)
    }
}

/// The qualifying days of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthOccurrences {
    /// Zero-based month (0 = January).
    pub month0: u32,
    /// Qualifying days, ascending.
    pub days: Vec<u32>,
}

/// All qualifying days of a year, one entry per month in calendar order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccurrenceSet {
    pub year: i32,
    pub months: Vec<MonthOccurrences>,
}

impl OccurrenceSet {
    /// Iterates over every occurrence in chronological order.
    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.months.iter().flat_map(move |m| {
            m.days
                .iter()
                .filter_map(move |&day| CalendarDate::from_ymd0(self.year, m.month0, day))
        })
    }

    /// Returns the number of occurrences across all months.
    pub fn len(&self) -> usize {
        self.months.iter().map(|m| m.days.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Computes the 2nd and 4th `weekday` of every month of `year`.
///
/// Each month is walked from day 1 to day 31 and the walk stops as soon as
/// the day no longer exists in that month. Years chrono cannot represent
/// yield months with no days.
pub fn occurrences_for_year(year: i32, weekday: Weekday) -> OccurrenceSet {
    let months = (0..12)
        .map(|month0| MonthOccurrences {
            month0,
            days: qualifying_days(year, month0 + 1, weekday),
        })
        .collect();

    OccurrenceSet { year, months }
}

fn qualifying_days(year: i32, month: u32, weekday: Weekday) -> Vec<u32> {
    let mut seen = 0;
    let mut days = Vec::with_capacity(ORDINALS.len());

    for day in 1..=31 {
        // Past the end of the month.
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            break;
        };
        if date.weekday() != weekday {
            continue;
        }
        seen += 1;
        if ORDINALS.contains(&seen) {
            days.push(day);
        }
    }

    days
}
