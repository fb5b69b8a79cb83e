//! Default command: print the next meeting.

use chrono::NaiveDateTime;

use nextgroup_core::{MeetingSchedule, resolve_next_meeting_message};

use crate::error::CliResult;

/// Renders the next meeting as a display line or as JSON.
pub fn render(schedule: &MeetingSchedule, now: NaiveDateTime, json: bool) -> CliResult<String> {
    if json {
        Ok(serde_json::to_string_pretty(&schedule.json(now))?)
    } else {
        Ok(resolve_next_meeting_message(now, schedule))
    }
}

/// Print the next meeting to stdout.
pub fn run(schedule: &MeetingSchedule, now: NaiveDateTime, json: bool) -> CliResult<()> {
    println!("{}", render(schedule, now, json)?);
    Ok(())
}
