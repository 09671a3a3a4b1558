//! Utility functions for CLI operations.
//!
//! Shared by every command: global options, configuration loading, and
//! building the path set from positional arguments.

use crate::error::CliError;
use pathset::{CaseSensitivity, Config, ConfigBuilder, OsProbe, PathSet};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Compare paths case-insensitively.
    pub ignore_case: bool,

    /// Resolve symlinks in existing paths.
    pub follow_symlinks: bool,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(path) = &global.config {
        builder = builder.with_config_file(path);
    }

    let mut overrides = Config::default();
    if global.ignore_case {
        overrides.case_sensitivity = Some(CaseSensitivity::Insensitive);
    }
    if global.follow_symlinks {
        overrides.follow_symlinks = Some(true);
    }

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build the path set for a command from its positional paths.
pub fn build_path_set(global: &GlobalOptions, paths: &[String]) -> Result<PathSet, CliError> {
    let config = load_configuration(global)?;
    let set = PathSet::with_options(paths, config.os_probe(), config.match_options())?;
    if set.is_empty() {
        log::info!("no paths given; every candidate is covered");
    } else {
        log::info!("checking against {} path(s)", set.len());
    }
    Ok(set)
}

/// Whether parent-directory matching applies for a command.
pub fn allow_parent_directory(set: &PathSet<OsProbe>, strict: bool) -> bool {
    !strict && set.options().allow_parent_directory
}
