//! Schedule command: list the expected dates of a year.

use nextgroup_core::MeetingSchedule;

use crate::error::CliResult;

/// Renders the heading and one line per month.
pub fn render(schedule: &MeetingSchedule, year: i32) -> String {
    let mut out = format!("Expected dates for {}:\n", year);
    for line in schedule.schedule(year) {
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Print the expected dates of `year` to stdout.
pub fn run(schedule: &MeetingSchedule, year: i32) -> CliResult<()> {
    print!("{}", render(schedule, year));
    Ok(())
}
