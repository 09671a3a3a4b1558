//! Configuration system for pathset.
//!
//! # Configuration Precedence
//!
//! Sources are merged from lowest to highest precedence:
//!
//! 1. Built-in defaults
//! 2. Configuration file (`pathset.yaml`, discovered by walking up from the
//!    working directory, or given explicitly)
//! 3. Environment variables (`PATHSET_*`)
//! 4. Programmatic overrides (via [`ConfigBuilder::with_config`])
//!
//! # Examples
//!
//! ```
//! use pathset::config::{Config, ConfigBuilder};
//! use pathset::CaseSensitivity;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         case_sensitivity: Some(CaseSensitivity::Insensitive),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.match_options().case_sensitivity, CaseSensitivity::Insensitive);
//! ```

pub mod environment;
pub mod loader;
pub mod schema;

pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use schema::Config;

use std::env;
use std::path::PathBuf;

use crate::error::Result;

/// Assembles a [`Config`] from files, environment and overrides.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that reads files and environment variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start configuration discovery from `dir` instead of the process cwd.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Load exactly this file instead of discovering one.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        match &mut self.overrides {
            Some(existing) => existing.merge_from(&config),
            None => self.overrides = Some(config),
        }
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `PATHSET_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Merge all enabled sources.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// or an environment variable holds an invalid value.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(path) = &self.config_file {
                config.merge_from(&ConfigLoader::load_file(path)?);
            } else {
                let start = match self.working_dir {
                    Some(dir) => dir,
                    None => env::current_dir()?,
                };
                if let Some(source) = ConfigLoader::discover(&start)? {
                    config.merge_from(&source.config);
                }
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            config.merge_from(overrides);
        }

        Ok(config)
    }
}
