//! Configuration commands.

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// Dump the current configuration to stdout.
pub fn dump(config: &CliConfig) -> CliResult<()> {
    let toml_str = toml::to_string_pretty(config)?;
    println!("# config.toml ({})", CliConfig::default_path().display());
    println!("{}", toml_str);

    Ok(())
}

/// Check the configuration and report what will be used.
///
/// Returns the lines that were printed so the check can be tested.
pub fn check(config: &CliConfig) -> CliResult<Vec<String>> {
    if config.meeting.time_label.trim().is_empty() {
        return Err(CliError::config("meeting.time_label must not be empty"));
    }

    let schedule = config.schedule();
    let mut report = Vec::new();
    let configured = config.meeting.cancellations.len();
    let parsed = schedule.cancellations().len();
    if parsed < configured {
        report.push(format!(
            "warning: {} cancellation entr{} could not be parsed and will be ignored",
            configured - parsed,
            if configured - parsed == 1 { "y" } else { "ies" }
        ));
    }
    for date in schedule.cancellations().iter() {
        if date.weekday() != schedule.cadence().weekday {
            report.push(format!(
                "warning: cancellation {} is not a {} and has no effect",
                date,
                schedule.cadence().weekday
            ));
        }
    }
    report.push("Configuration is valid.".to_string());
    Ok(report)
}

/// Validate the configuration.
pub fn validate(config: &CliConfig) -> CliResult<()> {
    for line in check(config)? {
        println!("{}", line);
    }
    Ok(())
}

/// Show the configuration file path.
pub fn path() -> CliResult<()> {
    let config_path = CliConfig::default_path();
    println!("config: {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let report = check(&CliConfig::default()).unwrap();
        assert_eq!(report, vec!["Configuration is valid.".to_string()]);
    }

    #[test]
    fn reports_unparsable_and_off_weekday_cancellations() {
        let mut config = CliConfig::default();
        config.meeting.cancellations = vec![
            "2025-01-23".to_string(),
            "2025-01-24".to_string(),
            "nope".to_string(),
        ];
        let report = check(&config).unwrap();
        assert_eq!(report.len(), 3);
        assert!(report[0].contains("1 cancellation entry"));
        assert!(report[1].contains("2025-01-24 is not a Thu"));
        assert_eq!(report[2], "Configuration is valid.");
    }

    #[test]
    fn empty_time_label_is_invalid() {
        let mut config = CliConfig::default();
        config.meeting.time_label = "  ".to_string();
        assert!(matches!(check(&config), Err(CliError::Config(_))));
    }
}
