//! Next-meeting resolution.
//!
//! [`NextMeetingResolver`] picks the next meeting date relative to a local
//! instant:
//!
//! 1. Candidates are the cadence occurrences of the current year, in order.
//! 2. Cancelled dates are skipped.
//! 3. A candidate on today's date wins immediately while the local hour is
//!    still before the cutoff hour.
//! 4. Candidates whose cutoff timestamp is at or before now are past.
//! 5. The remaining candidate closest to now is selected.
//!
//! When the current year has nothing left the scan moves on to the following
//! year(s), so late December resolves to January instead of nothing.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cadence::Cadence;
use crate::cancellations::CancellationRegistry;
use crate::date::{CalendarDate, CutoffHour};
use crate::error::ConfigError;

/// Default number of years scanned after the current one.
pub const DEFAULT_LOOKAHEAD_YEARS: u32 = 1;

/// Upper bound on the configurable look-ahead.
pub const MAX_LOOKAHEAD_YEARS: u32 = 10;

/// The meeting picked by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMeeting {
    pub date: CalendarDate,
    /// The meeting is today and has not reached the cutoff hour yet.
    pub is_today: bool,
}

/// Outcome of a resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    /// A meeting date was found.
    Scheduled(ResolvedMeeting),
    /// No candidate survived filtering within the scanned window.
    Unresolved,
    /// Meetings are suspended for the season.
    Suspended,
}

impl Resolution {
    /// Returns the resolved meeting, if any.
    pub fn meeting(&self) -> Option<&ResolvedMeeting> {
        match self {
            Self::Scheduled(meeting) => Some(meeting),
            Self::Unresolved | Self::Suspended => None,
        }
    }

    /// Returns the status label used in machine-readable output.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Scheduled(_) => "scheduled",
            Self::Unresolved => "unresolved",
            Self::Suspended => "suspended",
        }
    }
}

/// Number of years after the current one that may be scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Lookahead(u32);

impl Lookahead {
    pub fn new(years: u32) -> Result<Self, ConfigError> {
        if (1..=MAX_LOOKAHEAD_YEARS).contains(&years) {
            Ok(Self(years))
        } else {
            Err(ConfigError::InvalidLookahead(years))
        }
    }

    pub fn years(&self) -> u32 {
        self.0
    }
}

impl Default for Lookahead {
    fn default() -> Self {
        Self(DEFAULT_LOOKAHEAD_YEARS)
    }
}

impl TryFrom<u32> for Lookahead {
    type Error = ConfigError;

    fn try_from(years: u32) -> Result<Self, Self::Error> {
        Self::new(years)
    }
}

impl From<Lookahead> for u32 {
    fn from(lookahead: Lookahead) -> Self {
        lookahead.0
    }
}

/// Selects the next meeting date.
#[derive(Debug, Clone)]
pub struct NextMeetingResolver<'a> {
    cadence: Cadence,
    cancellations: &'a CancellationRegistry,
    cutoff: CutoffHour,
    lookahead: Lookahead,
    suspended: bool,
}

impl<'a> NextMeetingResolver<'a> {
    /// Creates a resolver with the default cutoff and look-ahead.
    pub fn new(cadence: Cadence, cancellations: &'a CancellationRegistry) -> Self {
        Self {
            cadence,
            cancellations,
            cutoff: CutoffHour::default(),
            lookahead: Lookahead::default(),
            suspended: false,
        }
    }

    /// Builder: set the cutoff hour.
    pub fn with_cutoff(mut self, cutoff: CutoffHour) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Builder: set how many following years may be scanned.
    pub fn with_lookahead(mut self, lookahead: Lookahead) -> Self {
        self.lookahead = lookahead;
        self
    }

    /// Builder: force a suspended result.
    pub fn with_suspended(mut self, suspended: bool) -> Self {
        self.suspended = suspended;
        self
    }

    /// Resolves the next meeting relative to the local instant `now`.
    pub fn resolve(&self, now: NaiveDateTime) -> Resolution {
        if self.suspended {
            debug!("meetings suspended, skipping resolution");
            return Resolution::Suspended;
        }

        let first_year = now.year();
        let last_year = first_year.saturating_add_unsigned(self.lookahead.years());
        let mut best = Best::seeded(now, last_year);

        for year in first_year..=last_year {
            if year != first_year {
                debug!(year, "nothing left in previous year, extending scan");
            }
            if let Some(today) = self.scan_year(year, now, &mut best) {
                return Resolution::Scheduled(today);
            }
            if let Some(meeting) = best.meeting {
                debug!(date = %meeting.date, is_today = meeting.is_today, "selected next meeting");
                return Resolution::Scheduled(meeting);
            }
        }

        debug!(%now, "no meeting found in scanned window");
        Resolution::Unresolved
    }

    /// Scans one year, updating `best`. Returns early with a same-day meeting
    /// that has not reached the cutoff yet.
    fn scan_year(&self, year: i32, now: NaiveDateTime, best: &mut Best) -> Option<ResolvedMeeting> {
        let occurrences = self.cadence.occurrences(year);

        for date in occurrences.dates() {
            let at = date.at_hour(self.cutoff);

            if self.cancellations.is_cancelled(date) {
                trace!(%date, "skipping cancelled meeting");
                continue;
            }

            if date.contains(now) && now.hour() < self.cutoff.hour() {
                debug!(%date, "meeting is today");
                return Some(ResolvedMeeting {
                    date,
                    is_today: true,
                });
            }

            if at <= now {
                trace!(%date, "skipping past meeting");
                continue;
            }

            let distance = (at - now).abs();
            if distance < best.distance {
                trace!(%date, "closer candidate");
                best.distance = distance;
                best.meeting = Some(ResolvedMeeting {
                    date,
                    is_today: date.contains(now),
                });
            }
        }

        None
    }
}

/// Running best candidate during a scan.
struct Best {
    distance: TimeDelta,
    meeting: Option<ResolvedMeeting>,
}

impl Best {
    /// Seeds the best distance with January 1 following the last scanned
    /// year, so any real candidate is closer.
    fn seeded(now: NaiveDateTime, last_year: i32) -> Self {
        let horizon = last_year
            .checked_add(1)
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .and_then(|date| date.and_hms_opt(0, 0, 0));
        let distance = match horizon {
            Some(horizon) => (horizon - now).abs(),
            None => TimeDelta::MAX,
        };
        Self {
            distance,
            meeting: None,
        }
    }
}
