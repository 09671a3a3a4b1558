//! Environment variable handling for configuration overrides.
//!
//! Supported variables:
//! - `PATHSET_CASE_SENSITIVITY` (`sensitive` or `insensitive`)
//! - `PATHSET_ALLOW_PARENT_DIRECTORY` (boolean)
//! - `PATHSET_FOLLOW_SYMLINKS` (boolean)

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path_set::CaseSensitivity;

/// Handles environment variable overrides for configuration.
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply `PATHSET_*` environment overrides to `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unrecognized value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var("PATHSET_CASE_SENSITIVITY") {
            config.case_sensitivity = Some(CaseSensitivity::parse(&val).map_err(|_| {
                Error::Validation {
                    field: "PATHSET_CASE_SENSITIVITY".into(),
                    message: format!("Invalid value: '{val}' (expected sensitive/insensitive)"),
                }
            })?);
        }

        if let Ok(val) = env::var("PATHSET_ALLOW_PARENT_DIRECTORY") {
            config.allow_parent_directory =
                Some(Self::parse_bool("PATHSET_ALLOW_PARENT_DIRECTORY", &val)?);
        }

        if let Ok(val) = env::var("PATHSET_FOLLOW_SYMLINKS") {
            config.follow_symlinks = Some(Self::parse_bool("PATHSET_FOLLOW_SYMLINKS", &val)?);
        }

        Ok(())
    }

    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
