//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including date and price parsing, configuration loading, database
//! management, and output formatting.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::ValueEnum;

use lodge::database::default_data_dir;
use lodge::{Config, ConfigBuilder, Database, DatabaseConfig, PriceCents, StayDates};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Output format for list commands.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

/// Resolve the data directory path.
///
/// Priority: global option > default (`~/.lodge`).
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref data_dir) = global.data_dir {
        return Ok(data_dir.clone());
    }
    default_data_dir().map_err(CliError::from)
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. Configuration file in the data directory
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is
/// disabled (by flag, environment, or configuration file).
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_data_dir(global)?.join("lodge.db");

    if !db_path.exists() && (global.disable_autoinit || config.autoinit_disabled()) {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path);

    // Set busy timeout if specified
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config =
            db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout_seconds) = config.maximum_lock_wait_seconds {
        db_config = db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Parse an ISO date argument (YYYY-MM-DD).
pub fn parse_date(value: &str, name: &str) -> Result<NaiveDate, CliError> {
    value.parse().map_err(|_| {
        CliError::InvalidArguments(format!("{name} must be an ISO date (YYYY-MM-DD), got {value}"))
    })
}

/// Parse a pair of ISO dates into a stay.
pub fn parse_stay(check_in: &str, check_out: &str) -> Result<StayDates, CliError> {
    let check_in = parse_date(check_in, "check-in")?;
    let check_out = parse_date(check_out, "check-out")?;
    StayDates::new(check_in, check_out).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Parse a decimal price argument ("189.00", "99", "99.5") into cents.
pub fn parse_price(value: &str) -> Result<PriceCents, CliError> {
    let invalid =
        || CliError::InvalidArguments(format!("price must be a decimal amount, got {value}"));

    let (whole, frac) = match value.split_once('.') {
        Some((w, f)) => (w, f),
        None => (value, ""),
    };

    if whole.is_empty()
        || !whole.chars().all(|c| c.is_ascii_digit())
        || frac.len() > 2
        || !frac.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid());
    }

    let whole: i64 = whole.parse().map_err(|_| invalid())?;
    let frac_cents = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
        _ => frac.parse::<i64>().map_err(|_| invalid())?,
    };

    let cents = whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(frac_cents))
        .ok_or_else(invalid)?;

    PriceCents::try_from(cents).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: std::time::SystemTime) -> String {
    use chrono::{DateTime, Utc};
    let dt: DateTime<Utc> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

/// Convert csv::Error to CliError.
pub fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

/// Convert serde_json::Error to CliError.
pub fn json_error(e: serde_json::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}
