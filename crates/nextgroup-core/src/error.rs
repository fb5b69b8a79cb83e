//! Configuration error types.

use thiserror::Error;

/// Errors raised while validating meeting configuration.
///
/// Resolution itself never fails; these only surface when static
/// configuration is loaded.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Cutoff hour outside 0-23.
    #[error("cutoff hour must be between 0 and 23, got {0}")]
    InvalidCutoffHour(u8),

    /// Look-ahead outside the supported range.
    #[error("lookahead_years must be between 1 and {max}, got {0}", max = crate::resolver::MAX_LOOKAHEAD_YEARS)]
    InvalidLookahead(u32),
}
