//! Static meeting configuration.
//!
//! [`MeetingConfig`] is the serde model of the `[meeting]` and `[display]`
//! settings. [`MeetingSchedule`] is built from it once at process start and
//! answers every subsequent query without touching the configuration again.

use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cadence::{Cadence, OccurrenceSet};
use crate::cancellations::CancellationRegistry;
use crate::date::CutoffHour;
use crate::format::{FormatOptions, JsonOutput, MessageFormatter, OrdinalStyle, format_schedule};
use crate::resolver::{Lookahead, NextMeetingResolver, Resolution};

/// Meeting settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeetingConfig {
    /// Weekday of the meeting; the 2nd and 4th of each month qualify.
    pub weekday: Weekday,

    /// Local hour after which today's meeting is no longer upcoming.
    pub cutoff_hour: CutoffHour,

    /// Meeting start time as displayed.
    pub time_label: String,

    /// Force the off-season message.
    pub suspended: bool,

    /// Message shown while suspended.
    pub off_season_message: String,

    /// Years after the current one to search when the current year is
    /// exhausted.
    pub lookahead_years: Lookahead,

    /// Cancelled dates (`YYYY-MM-DD`, optional time ignored).
    pub cancellations: Vec<String>,
}

impl Default for MeetingConfig {
    fn default() -> Self {
        let display = FormatOptions::default();
        Self {
            weekday: Cadence::default().weekday,
            cutoff_hour: CutoffHour::default(),
            time_label: display.time_label,
            suspended: false,
            off_season_message: display.off_season_message,
            lookahead_years: Lookahead::default(),
            cancellations: Vec::new(),
        }
    }
}

/// Display settings that do not affect resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Optional prefix for scheduled messages.
    pub headline: Option<String>,

    /// Text shown when no meeting could be resolved.
    pub no_meeting_text: String,

    /// Day number suffix style.
    pub ordinal_style: OrdinalStyle,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let display = FormatOptions::default();
        Self {
            headline: display.headline,
            no_meeting_text: display.no_meeting_text,
            ordinal_style: display.ordinal_style,
        }
    }
}

/// The loaded meeting schedule: cadence, cancellations and display rules.
#[derive(Debug, Clone)]
pub struct MeetingSchedule {
    cadence: Cadence,
    cancellations: CancellationRegistry,
    cutoff: CutoffHour,
    lookahead: Lookahead,
    suspended: bool,
    formatter: MessageFormatter,
}

impl Default for MeetingSchedule {
    fn default() -> Self {
        Self::from_config(&MeetingConfig::default(), &DisplaySettings::default())
    }
}

impl MeetingSchedule {
    /// Builds a schedule from configuration, parsing the cancellation list.
    pub fn from_config(meeting: &MeetingConfig, display: &DisplaySettings) -> Self {
        let cancellations = CancellationRegistry::from_entries(&meeting.cancellations);
        debug!(
            weekday = %meeting.weekday,
            cutoff = %meeting.cutoff_hour,
            cancellations = cancellations.len(),
            "loaded meeting schedule"
        );

        let options = FormatOptions {
            time_label: meeting.time_label.clone(),
            off_season_message: meeting.off_season_message.clone(),
            no_meeting_text: display.no_meeting_text.clone(),
            headline: display.headline.clone(),
            ordinal_style: display.ordinal_style,
        };

        Self {
            cadence: Cadence::new(meeting.weekday),
            cancellations,
            cutoff: meeting.cutoff_hour,
            lookahead: meeting.lookahead_years,
            suspended: meeting.suspended,
            formatter: MessageFormatter::new(options),
        }
    }

    /// Builder: override the suspension flag.
    pub fn with_suspended(mut self, suspended: bool) -> Self {
        self.suspended = suspended;
        self
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn cancellations(&self) -> &CancellationRegistry {
        &self.cancellations
    }

    pub fn formatter(&self) -> &MessageFormatter {
        &self.formatter
    }

    fn resolver(&self) -> NextMeetingResolver<'_> {
        NextMeetingResolver::new(self.cadence, &self.cancellations)
            .with_cutoff(self.cutoff)
            .with_lookahead(self.lookahead)
            .with_suspended(self.suspended)
    }

    /// Resolves the next meeting relative to the local instant `now`.
    pub fn resolve(&self, now: NaiveDateTime) -> Resolution {
        self.resolver().resolve(now)
    }

    /// Resolves and formats the next meeting as a display line.
    pub fn message(&self, now: NaiveDateTime) -> String {
        self.formatter.format(&self.resolve(now))
    }

    /// Resolves and formats the next meeting as JSON output.
    pub fn json(&self, now: NaiveDateTime) -> JsonOutput {
        self.formatter.format_json(&self.resolve(now))
    }

    /// Expands the cadence for a year.
    pub fn occurrences(&self, year: i32) -> OccurrenceSet {
        self.cadence.occurrences(year)
    }

    /// Renders the expected dates of a year, marking cancellations.
    pub fn schedule(&self, year: i32) -> Vec<String> {
        format_schedule(&self.occurrences(year), &self.cancellations)
    }
}

/// Resolves the next meeting for `now` and returns the display message.
///
/// This is the single entry point for presentation layers.
pub fn resolve_next_meeting_message(now: NaiveDateTime, schedule: &MeetingSchedule) -> String {
    schedule.message(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = MeetingConfig::default();
        assert_eq!(config.weekday, Weekday::Thu);
        assert_eq!(config.cutoff_hour.hour(), 21);
        assert_eq!(config.time_label, "7:00 PM");
        assert!(!config.suspended);
        assert_eq!(config.lookahead_years.years(), 1);
        assert!(config.cancellations.is_empty());
    }

    #[test]
    fn entry_point() {
        let schedule = MeetingSchedule::default();
        assert_eq!(
            resolve_next_meeting_message(local(2025, 1, 9, 10, 0), &schedule),
            "TODAY at 7:00 PM"
        );
        assert_eq!(
            resolve_next_meeting_message(local(2025, 1, 10, 10, 0), &schedule),
            "January 23th at 7:00 PM"
        );
    }

    #[test]
    fn from_config_wires_everything() {
        let meeting = MeetingConfig {
            cutoff_hour: CutoffHour::new(19).unwrap(),
            time_label: "6:30 PM".to_string(),
            cancellations: vec!["2025-01-23".to_string(), "garbage".to_string()],
            ..Default::default()
        };
        let display = DisplaySettings {
            headline: Some("Next group meeting is:".to_string()),
            ordinal_style: OrdinalStyle::English,
            ..Default::default()
        };
        let schedule = MeetingSchedule::from_config(&meeting, &display);

        assert_eq!(schedule.cancellations().len(), 1);
        assert_eq!(
            schedule.message(local(2025, 1, 10, 10, 0)),
            "Next group meeting is: February 13th at 6:30 PM"
        );
        // Cutoff at 19:00: 20:00 on the meeting day is already past.
        assert_eq!(
            schedule.message(local(2025, 2, 13, 20, 0)),
            "Next group meeting is: February 27th at 6:30 PM"
        );
    }

    #[test]
    fn suspended_override() {
        let schedule = MeetingSchedule::default().with_suspended(true);
        assert_eq!(schedule.message(local(2025, 1, 9, 10, 0)), "No group this week");
        assert_eq!(schedule.json(local(2025, 1, 9, 10, 0)).status, "suspended");
    }

    #[test]
    fn schedule_listing() {
        let meeting = MeetingConfig {
            cancellations: vec!["2025-12-25".to_string()],
            ..Default::default()
        };
        let schedule = MeetingSchedule::from_config(&meeting, &DisplaySettings::default());
        let lines = schedule.schedule(2025);
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "Jan  9 & 23");
        assert_eq!(lines[11], "Dec 11 & 25 (cancelled)");
    }

    #[test]
    fn toml_sections() {
        let toml_content = r#"
weekday = "thursday"
cutoff_hour = 20
suspended = true
cancellations = ["2025-06-26T19:00"]
"#;
        let config: MeetingConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.cutoff_hour.hour(), 20);
        assert!(config.suspended);
        assert_eq!(config.time_label, "7:00 PM");
        assert_eq!(config.cancellations.len(), 1);
    }

    #[test]
    fn toml_rejects_bad_cutoff() {
        let err = toml::from_str::<MeetingConfig>("cutoff_hour = 24").unwrap_err();
        assert!(err.to_string().contains("cutoff hour"));
    }

    #[test]
    fn toml_rejects_bad_lookahead() {
        assert!(toml::from_str::<MeetingConfig>("lookahead_years = 0").is_err());
    }
}
