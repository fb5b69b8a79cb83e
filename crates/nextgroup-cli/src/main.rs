//! nextgroup CLI entry point.

use std::process::ExitCode;

use chrono::{Datelike, Local};
use clap::Parser;
use tracing::debug;

use nextgroup_cli::cli::{Cli, Command, ConfigAction};
use nextgroup_cli::commands;
use nextgroup_cli::config::CliConfig;
use nextgroup_cli::error::CliResult;
use nextgroup_core::{TracingConfig, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    // Load configuration
    let config = match cli.config {
        Some(ref path) => CliConfig::load_from(path),
        None => CliConfig::load(),
    };

    // Initialize tracing before reporting config errors
    let debug = cli.debug || config.as_ref().is_ok_and(|c| c.debug);
    let tracing_config = if debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::default()
    };
    init_tracing(tracing_config)?;

    let config = config?;
    let now = cli.at.unwrap_or_else(|| Local::now().naive_local());
    debug!(%now, "resolving");

    match cli.command {
        Some(Command::Schedule { year }) => {
            commands::schedule::run(&config.schedule(), year.unwrap_or(now.year()))
        }
        Some(Command::Config { action }) => match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(),
        },
        None => {
            let schedule = config.schedule().with_suspended(cli.suspended || config.meeting.suspended);
            commands::next::run(&schedule, now, cli.json)
        }
    }
}
