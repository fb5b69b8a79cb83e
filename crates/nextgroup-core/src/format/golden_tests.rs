//! Golden tests for output formatting.
//!
//! These tests use insta inline snapshots to keep the user-visible strings
//! stable. Run `cargo insta review` after intentional changes.

use chrono::{NaiveDate, NaiveDateTime};

use crate::cadence::occurrences_for_year;
use crate::cancellations::CancellationRegistry;
use crate::config::{DisplaySettings, MeetingConfig, MeetingSchedule};
use crate::format::{FormatOptions, MessageFormatter, OrdinalStyle, format_schedule};
use crate::resolver::Resolution;

/// Create a local datetime for testing.
fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// Schedule with the site's banner headline.
fn banner_schedule(cancellations: &[&str]) -> MeetingSchedule {
    let meeting = MeetingConfig {
        cancellations: cancellations.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    };
    let display = DisplaySettings {
        headline: Some("Next group meeting is:".to_string()),
        ..Default::default()
    };
    MeetingSchedule::from_config(&meeting, &display)
}

#[test]
fn message_today() {
    let output = banner_schedule(&[]).message(local(2025, 1, 9, 10, 0));
    insta::assert_snapshot!(output, @"Next group meeting is: TODAY at 7:00 PM");
}

#[test]
fn message_upcoming() {
    let output = banner_schedule(&[]).message(local(2025, 1, 10, 10, 0));
    insta::assert_snapshot!(output, @"Next group meeting is: January 23th at 7:00 PM");
}

#[test]
fn message_after_cutoff() {
    let output = banner_schedule(&[]).message(local(2025, 1, 9, 22, 0));
    insta::assert_snapshot!(output, @"Next group meeting is: January 23th at 7:00 PM");
}

#[test]
fn message_skips_cancellation() {
    let output = banner_schedule(&["2025-01-23"]).message(local(2025, 1, 10, 10, 0));
    insta::assert_snapshot!(output, @"Next group meeting is: February 13th at 7:00 PM");
}

#[test]
fn message_year_rollover() {
    let output = banner_schedule(&[]).message(local(2025, 12, 29, 10, 0));
    insta::assert_snapshot!(output, @"Next group meeting is: January 8th at 7:00 PM");
}

#[test]
fn message_english_ordinals() {
    let formatter = MessageFormatter::new(FormatOptions {
        ordinal_style: OrdinalStyle::English,
        ..Default::default()
    });
    let schedule = MeetingSchedule::default();
    let output = formatter.format(&schedule.resolve(local(2025, 10, 10, 10, 0)));
    insta::assert_snapshot!(output, @"October 23rd at 7:00 PM");
}

#[test]
fn message_unresolved() {
    let output = MessageFormatter::default().format(&Resolution::Unresolved);
    insta::assert_snapshot!(output, @"No upcoming meeting scheduled");
}

#[test]
fn message_suspended() {
    let output = banner_schedule(&[])
        .with_suspended(true)
        .message(local(2025, 1, 9, 10, 0));
    insta::assert_snapshot!(output, @"No group this week");
}

#[test]
fn json_scheduled() {
    let output = banner_schedule(&[]).json(local(2025, 1, 10, 10, 0));
    insta::assert_snapshot!(
        serde_json::to_string(&output).unwrap(),
        @r#"{"message":"Next group meeting is: January 23th at 7:00 PM","status":"scheduled","date":"2025-01-23","is_today":false,"time_label":"7:00 PM"}"#
    );
}

#[test]
fn json_unresolved_omits_date() {
    let output = MessageFormatter::default().format_json(&Resolution::Unresolved);
    insta::assert_snapshot!(
        serde_json::to_string(&output).unwrap(),
        @r#"{"message":"No upcoming meeting scheduled","status":"unresolved","is_today":false,"time_label":"7:00 PM"}"#
    );
}

#[test]
fn schedule_2025() {
    let cancellations = CancellationRegistry::from_entries(["2025-06-26", "2025-12-25T19:00"]);
    let lines = format_schedule(&occurrences_for_year(2025, chrono::Weekday::Thu), &cancellations);
    insta::assert_snapshot!(lines.join("\n"), @r"
    Jan  9 & 23
    Feb 13 & 27
    Mar 13 & 27
    Apr 10 & 24
    May  8 & 22
    Jun 12 & 26 (cancelled)
    Jul 10 & 24
    Aug 14 & 28
    Sep 11 & 25
    Oct  9 & 23
    Nov 13 & 27
    Dec 11 & 25 (cancelled)
    ");
}

#[test]
fn schedule_first_day_cancelled() {
    let cancellations = CancellationRegistry::from_entries(["2026-01-08"]);
    let lines = format_schedule(&occurrences_for_year(2026, chrono::Weekday::Thu), &cancellations);
    insta::assert_snapshot!(&lines[0], @"Jan  8 (cancelled) & 22");
}
