//! Output formatting for the next meeting.
//!
//! This module turns a [`Resolution`] into display text:
//! - **Message**: the single line shown by the presentation layer
//! - **JSON**: machine-readable output
//! - **Schedule**: the expected dates of a whole year
//!
//! # Example
//!
//! ```rust
//! use nextgroup_core::format::{FormatOptions, MessageFormatter};
//! use nextgroup_core::Resolution;
//!
//! let formatter = MessageFormatter::new(FormatOptions::default());
//! assert_eq!(
//!     formatter.format(&Resolution::Unresolved),
//!     "No upcoming meeting scheduled"
//! );
//! ```

#[cfg(test)]
mod golden_tests;

use serde::{Deserialize, Serialize};

use crate::cadence::OccurrenceSet;
use crate::cancellations::CancellationRegistry;
use crate::date::CalendarDate;
use crate::resolver::Resolution;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// How the day number is suffixed in messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrdinalStyle {
    /// Always "th" (e.g. "23th").
    #[default]
    Th,
    /// English ordinal suffixes (e.g. "1st", "22nd", "23rd", "11th").
    English,
}

impl OrdinalStyle {
    /// Returns the suffix for a day of the month.
    pub fn suffix(&self, day: u32) -> &'static str {
        match self {
            Self::Th => "th",
            Self::English => match (day % 10, day % 100) {
                (_, 11..=13) => "th",
                (1, _) => "st",
                (2, _) => "nd",
                (3, _) => "rd",
                _ => "th",
            },
        }
    }
}

/// Configuration options for message formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Meeting start time as displayed (e.g. "7:00 PM").
    pub time_label: String,
    /// Text shown while meetings are suspended.
    pub off_season_message: String,
    /// Text shown when no meeting could be resolved.
    pub no_meeting_text: String,
    /// Optional prefix for scheduled messages (e.g. "Next group meeting is:").
    pub headline: Option<String>,
    /// Day number suffix style.
    pub ordinal_style: OrdinalStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            time_label: "7:00 PM".to_string(),
            off_season_message: "No group this week".to_string(),
            no_meeting_text: "No upcoming meeting scheduled".to_string(),
            headline: None,
            ordinal_style: OrdinalStyle::Th,
        }
    }
}

/// JSON output format for machine consumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonOutput {
    /// The display message.
    pub message: String,
    /// One of `scheduled`, `unresolved` or `suspended`.
    pub status: String,
    /// The resolved date, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<CalendarDate>,
    /// Whether the resolved meeting is today.
    pub is_today: bool,
    /// Meeting start time as displayed.
    pub time_label: String,
}

/// Renders resolutions into display text.
#[derive(Debug, Clone, Default)]
pub struct MessageFormatter {
    options: FormatOptions,
}

impl MessageFormatter {
    /// Creates a new MessageFormatter with the given options.
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Formats a resolution as a single display line.
    pub fn format(&self, resolution: &Resolution) -> String {
        let when = match resolution {
            Resolution::Suspended => return self.options.off_season_message.clone(),
            Resolution::Unresolved => return self.options.no_meeting_text.clone(),
            Resolution::Scheduled(meeting) if meeting.is_today => {
                format!("TODAY at {}", self.options.time_label)
            }
            Resolution::Scheduled(meeting) => format!(
                "{} at {}",
                self.format_date(meeting.date),
                self.options.time_label
            ),
        };

        match self.options.headline.as_deref() {
            Some(headline) if !headline.is_empty() => format!("{} {}", headline, when),
            _ => when,
        }
    }

    /// Formats a date as "<Month name> <day><suffix>", e.g. "January 23th".
    pub fn format_date(&self, date: CalendarDate) -> String {
        format!(
            "{} {}{}",
            month_name(date.month0()),
            date.day(),
            self.options.ordinal_style.suffix(date.day())
        )
    }

    /// Formats a resolution as JSON output.
    pub fn format_json(&self, resolution: &Resolution) -> JsonOutput {
        let meeting = resolution.meeting();
        JsonOutput {
            message: self.format(resolution),
            status: resolution.status().to_string(),
            date: meeting.map(|m| m.date),
            is_today: meeting.is_some_and(|m| m.is_today),
            time_label: self.options.time_label.clone(),
        }
    }
}

/// Returns the English name of a zero-based month.
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES
        .get(month0 as usize)
        .copied()
        .unwrap_or("Unknown")
}

/// Returns the three-letter abbreviation of a zero-based month.
pub fn short_month_name(month0: u32) -> &'static str {
    let name = month_name(month0);
    name.get(..3).unwrap_or(name)
}

/// Renders the expected meeting dates of a year, one line per month.
///
/// Days are joined with " & " and cancelled days are marked:
/// `Jan  9 & 23 (cancelled)`.
pub fn format_schedule(
    occurrences: &OccurrenceSet,
    cancellations: &CancellationRegistry,
) -> Vec<String> {
    occurrences
        .months
        .iter()
        .map(|month| {
            let days: Vec<String> = month
                .days
                .iter()
                .enumerate()
                .map(|(i, &day)| {
                    let cancelled = CalendarDate::from_ymd0(occurrences.year, month.month0, day)
                        .is_some_and(|date| cancellations.is_cancelled(date));
                    // Align the first column of days.
                    let day = if i == 0 {
                        format!("{:>2}", day)
                    } else {
                        day.to_string()
                    };
                    if cancelled {
                        format!("{} (cancelled)", day)
                    } else {
                        day
                    }
                })
                .collect();
            format!("{} {}", short_month_name(month.month0), days.join(" & "))
        })
        .collect()
}
