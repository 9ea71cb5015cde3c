//! Environment variable handling for configuration overrides.
//!
//! This module provides support for LODGE_* environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use lodge::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads all LODGE_* environment variables and applies them to the
    /// configuration with higher precedence than file-based configs.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric length, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        // LODGE_CODE_LENGTH
        if let Ok(length) = env::var("LODGE_CODE_LENGTH") {
            config.confirmation_code_length =
                Some(length.parse().map_err(|_| Error::Validation {
                    field: "LODGE_CODE_LENGTH".into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        // LODGE_MAX_CODE_ATTEMPTS
        if let Ok(attempts) = env::var("LODGE_MAX_CODE_ATTEMPTS") {
            config.max_code_attempts = Some(attempts.parse().map_err(|_| Error::Validation {
                field: "LODGE_MAX_CODE_ATTEMPTS".into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        // LODGE_MAXIMUM_LOCK_WAIT_SECONDS
        if let Ok(seconds) = env::var("LODGE_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds =
                Some(seconds.parse().map_err(|_| Error::Validation {
                    field: "LODGE_MAXIMUM_LOCK_WAIT_SECONDS".into(),
                    message: "Must be a positive integer".into(),
                })?);
        }

        // LODGE_DISABLE_AUTOINIT
        if let Ok(val) = env::var("LODGE_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("LODGE_DISABLE_AUTOINIT", &val)?);
        }

        // LODGE_OUTPUT_FORMAT
        if let Ok(format) = env::var("LODGE_OUTPUT_FORMAT") {
            config.output_format = Some(Self::parse_format("LODGE_OUTPUT_FORMAT", &format)?);
        }

        Ok(())
    }

    /// Parse a boolean environment variable value.
    ///
    /// Accepts: true/false, 1/0, yes/no (case-insensitive).
    fn parse_bool(field: &str, value: &str) -> Result<bool> {
        match value.to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid boolean value: {value}"),
            }),
        }
    }

    /// Parse an output format environment variable value.
    fn parse_format(field: &str, value: &str) -> Result<OutputFormat> {
        match value.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "table" => Ok(OutputFormat::Table),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid output format: {value}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ALL_VARS: &[&str] = &[
        "LODGE_CODE_LENGTH",
        "LODGE_MAX_CODE_ATTEMPTS",
        "LODGE_MAXIMUM_LOCK_WAIT_SECONDS",
        "LODGE_DISABLE_AUTOINIT",
        "LODGE_OUTPUT_FORMAT",
    ];

    fn clear_env() {
        for var in ALL_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_no_vars_leaves_config_untouched() {
        clear_env();
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_numeric_overrides() {
        clear_env();
        env::set_var("LODGE_CODE_LENGTH", "8");
        env::set_var("LODGE_MAX_CODE_ATTEMPTS", "3");
        env::set_var("LODGE_MAXIMUM_LOCK_WAIT_SECONDS", "30");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();

        assert_eq!(config.confirmation_code_length, Some(8));
        assert_eq!(config.max_code_attempts, Some(3));
        assert_eq!(config.maximum_lock_wait_seconds, Some(30));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_numeric_rejected() {
        clear_env();
        env::set_var("LODGE_CODE_LENGTH", "not-a-number");

        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        assert!(result.is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_boolean_override() {
        clear_env();
        env::set_var("LODGE_DISABLE_AUTOINIT", "true");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.disable_autoinit, Some(true));

        env::set_var("LODGE_DISABLE_AUTOINIT", "0");
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.disable_autoinit, Some(false));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_boolean_rejected() {
        clear_env();
        env::set_var("LODGE_DISABLE_AUTOINIT", "maybe");

        let mut config = Config::default();
        assert!(EnvironmentConfig::apply_overrides(&mut config).is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_output_format_override() {
        clear_env();
        env::set_var("LODGE_OUTPUT_FORMAT", "JSON");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.output_format, Some(OutputFormat::Json));

        env::set_var("LODGE_OUTPUT_FORMAT", "svg");
        assert!(EnvironmentConfig::apply_overrides(&mut config).is_err());
        clear_env();
    }
}
