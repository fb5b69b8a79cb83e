//! Command-line interface definition.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};

/// nextgroup - When the group meets next
#[derive(Debug, Parser)]
#[command(name = "nextgroup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "NEXTGROUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Resolve against this local time instead of now (YYYY-MM-DDTHH:MM[:SS])
    #[arg(long, value_parser = parse_local_datetime)]
    pub at: Option<NaiveDateTime>,

    /// Show the off-season message regardless of the schedule
    #[arg(long)]
    pub suspended: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the expected meeting dates for a year
    Schedule {
        /// Year to list (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration
    Validate,

    /// Show configuration file path
    Path,
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parses a local wall-clock time given on the command line.
pub fn parse_local_datetime(value: &str) -> Result<NaiveDateTime, String> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| format!("invalid local time '{}', expected YYYY-MM-DDTHH:MM", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parse_at_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 9)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        assert_eq!(parse_local_datetime("2025-01-09T10:00").unwrap(), expected);
        assert_eq!(parse_local_datetime("2025-01-09 10:00:00").unwrap(), expected);
        assert!(parse_local_datetime("2025-01-09").is_err());
        assert!(parse_local_datetime("tomorrow").is_err());
    }

    #[test]
    fn parse_flags() {
        let cli = Cli::try_parse_from([
            "nextgroup",
            "--json",
            "--at",
            "2025-12-29T10:00",
            "--suspended",
        ])
        .unwrap();
        assert!(cli.json);
        assert!(cli.suspended);
        assert!(cli.at.is_some());
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_schedule_subcommand() {
        let cli = Cli::try_parse_from(["nextgroup", "schedule", "--year", "2026"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Schedule { year: Some(2026) })));
    }

    #[test]
    fn rejects_bad_at() {
        assert!(Cli::try_parse_from(["nextgroup", "--at", "soon"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
