//! CLI error types.

use std::io;

use thiserror::Error;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration value rejected by the core.
    #[error("invalid configuration: {0}")]
    Core(#[from] nextgroup_core::ConfigError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration file could not be parsed.
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// JSON output could not be serialized.
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging could not be initialized.
    #[error("failed to initialize logging: {0}")]
    Tracing(#[from] nextgroup_core::TracingError),
}

impl CliError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
