//! Configuration schema definitions.
//!
//! This module defines the configuration structure for lodge, including
//! booking behavior, database lock settings, and output formatting.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default confirmation code length.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Default number of attempts when retrying a colliding confirmation code.
pub const DEFAULT_CODE_ATTEMPTS: u32 = 5;

/// Default maximum time to wait on the database lock, in seconds.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// All fields are optional so that configuration sources can be layered:
/// unset fields fall through to the next source, ending at built-in
/// defaults exposed by the effective-value accessors.
///
/// # Examples
///
/// ```
/// use lodge::config::Config;
///
/// let config = Config {
///     confirmation_code_length: Some(8),
///     ..Default::default()
/// };
/// assert_eq!(config.code_length(), 8);
///
/// // Unset fields use built-in defaults
/// assert_eq!(Config::default().code_length(), 6);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Length of generated confirmation codes.
    pub confirmation_code_length: Option<usize>,

    /// Number of attempts before giving up on a colliding confirmation code.
    pub max_code_attempts: Option<u32>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,

    /// Output format for list commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Returns the effective confirmation code length.
    #[must_use]
    pub fn code_length(&self) -> usize {
        self.confirmation_code_length
            .unwrap_or(DEFAULT_CODE_LENGTH)
    }

    /// Returns the effective number of confirmation code attempts.
    #[must_use]
    pub fn code_attempts(&self) -> u32 {
        self.max_code_attempts.unwrap_or(DEFAULT_CODE_ATTEMPTS)
    }

    /// Returns the effective database lock wait duration.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Returns whether automatic database initialization is disabled.
    #[must_use]
    pub fn autoinit_disabled(&self) -> bool {
        self.disable_autoinit.unwrap_or(false)
    }

    /// Merges another configuration over this one.
    ///
    /// Fields set in `other` take precedence; unset fields keep their
    /// current value.
    #[must_use]
    pub fn merged_with(self, other: Self) -> Self {
        Self {
            confirmation_code_length: other
                .confirmation_code_length
                .or(self.confirmation_code_length),
            max_code_attempts: other.max_code_attempts.or(self.max_code_attempts),
            maximum_lock_wait_seconds: other
                .maximum_lock_wait_seconds
                .or(self.maximum_lock_wait_seconds),
            disable_autoinit: other.disable_autoinit.or(self.disable_autoinit),
            output_format: other.output_format.or(self.output_format),
        }
    }
}

/// Output format for list commands.
///
/// # Examples
///
/// ```
/// use lodge::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// Human-readable table format.
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Table => write!(f, "table"),
        }
    }
}
