//! Configuration system for lodge.
//!
//! This module provides layered configuration with support for:
//! - A YAML user configuration file (`~/.lodge/config.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (LODGE_*)
//! 3. User config (`~/.lodge/config.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! Basic usage with defaults:
//!
//! ```no_run
//! use lodge::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! println!("confirmation codes are {} characters", config.code_length());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use lodge::config::{Config, ConfigBuilder};
//!
//! let custom = Config {
//!     confirmation_code_length: Some(8),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.code_length(), 8);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::{Config, OutputFormat};
