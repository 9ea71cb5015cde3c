//! Configuration builder combining all sources.
//!
//! The builder loads the user configuration file, applies environment
//! variable overrides, and finally applies any programmatic overrides.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::error::Result;

/// Builds a [`Config`] by merging all configuration sources.
///
/// Precedence, lowest to highest: built-in defaults, the user config file,
/// LODGE_* environment variables, programmatic overrides.
///
/// # Examples
///
/// ```no_run
/// use lodge::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new().build().unwrap();
/// println!("code length: {}", config.code_length());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the data directory to load the user config from.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(data_dir.as_ref().to_path_buf());
        self
    }

    /// Skips loading configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips environment variable overrides.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Builds the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be parsed or an
    /// environment variable holds an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            ConfigLoader::load_user_config(self.data_dir.as_deref())?
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = self.overrides {
            config = config.merged_with(overrides);
        }

        Ok(config)
    }
}
