//! Configuration file discovery and loading.
//!
//! This module handles loading the lodge user configuration file from the
//! data directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Loads configuration from the user configuration file.
///
/// # Examples
///
/// ```no_run
/// use lodge::config::ConfigLoader;
///
/// let config = ConfigLoader::load_user_config(None).unwrap();
/// println!("code length: {}", config.code_length());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the user configuration file.
    ///
    /// If `data_dir` is provided, loads from `{data_dir}/config.yaml`.
    /// Otherwise uses the default data directory. A missing file yields
    /// the default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_user_config(data_dir: Option<&Path>) -> Result<Config> {
        let config_path = if let Some(dir) = data_dir {
            dir.join("config.yaml")
        } else {
            Self::user_config_path()?
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        Self::load_file(&config_path)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Get user config file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn user_config_path() -> Result<PathBuf> {
        let data_dir = crate::database::default_data_dir()?;
        Ok(data_dir.join("config.yaml"))
    }
}
