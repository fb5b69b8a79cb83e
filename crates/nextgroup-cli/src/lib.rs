//! CLI, configuration file loading, output rendering
//!
//! This crate provides the `nextgroup` command-line interface, the
//! presentation layer around `nextgroup-core`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use error::{CliError, CliResult};
