//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::path::OsProbe;
use crate::path_set::{CaseSensitivity, MatchOptions};

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; unset fields
/// fall back to the built-in defaults when the configuration is applied.
///
/// # Examples
///
/// ```
/// use pathset::config::Config;
/// use pathset::CaseSensitivity;
///
/// let config: Config = serde_yaml::from_str("case_sensitivity: insensitive\n").unwrap();
/// assert_eq!(config.case_sensitivity, Some(CaseSensitivity::Insensitive));
/// assert!(config.match_options().allow_parent_directory);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// How paths are compared.
    pub case_sensitivity: Option<CaseSensitivity>,

    /// Whether paths below a listed directory are covered by default.
    pub allow_parent_directory: Option<bool>,

    /// Whether existing paths have their symlinks resolved.
    pub follow_symlinks: Option<bool>,
}

impl Config {
    /// Overlay `other` onto `self`; fields set in `other` win.
    pub fn merge_from(&mut self, other: &Config) {
        if other.case_sensitivity.is_some() {
            self.case_sensitivity = other.case_sensitivity;
        }
        if other.allow_parent_directory.is_some() {
            self.allow_parent_directory = other.allow_parent_directory;
        }
        if other.follow_symlinks.is_some() {
            self.follow_symlinks = other.follow_symlinks;
        }
    }

    /// Match options with defaults filled in.
    #[must_use]
    pub fn match_options(&self) -> MatchOptions {
        let defaults = MatchOptions::default();
        MatchOptions {
            case_sensitivity: self.case_sensitivity.unwrap_or(defaults.case_sensitivity),
            allow_parent_directory: self
                .allow_parent_directory
                .unwrap_or(defaults.allow_parent_directory),
        }
    }

    /// A filesystem probe configured from these settings.
    #[must_use]
    pub fn os_probe(&self) -> OsProbe {
        OsProbe::new().with_follow_symlinks(self.follow_symlinks.unwrap_or(false))
    }
}
