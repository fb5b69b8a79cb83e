//! Core types: cadence, cancellations, next-meeting resolution, formatting

pub mod cadence;
pub mod cancellations;
pub mod config;
pub mod date;
pub mod error;
pub mod format;
pub mod resolver;
pub mod tracing;

pub use cadence::{Cadence, MonthOccurrences, OccurrenceSet, occurrences_for_year};
pub use cancellations::CancellationRegistry;
pub use config::{DisplaySettings, MeetingConfig, MeetingSchedule, resolve_next_meeting_message};
pub use date::{CalendarDate, CutoffHour};
pub use error::ConfigError;
pub use format::{
    FormatOptions, JsonOutput, MessageFormatter, OrdinalStyle, format_schedule, month_name,
};
pub use resolver::{Lookahead, NextMeetingResolver, Resolution, ResolvedMeeting};
pub use crate::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
