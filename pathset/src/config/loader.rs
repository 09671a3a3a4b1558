//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// File name searched for when discovering configuration.
pub const CONFIG_FILE_NAME: &str = "pathset.yaml";

/// A configuration file together with where it came from.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use pathset::config::ConfigLoader;
/// use std::path::Path;
///
/// if let Some(source) = ConfigLoader::discover(Path::new(".")).unwrap() {
///     println!("using {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Find the nearest `pathset.yaml`, walking up from `start_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read or parsed.
    pub fn discover(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                log::debug!("found configuration at {}", candidate.display());
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    config,
                }));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            log::debug!("cannot parse {}: {e}", path.display());
            Error::Configuration(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CaseSensitivity;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/pathset.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "case_sensitivity: [unclosed").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_load_unknown_key_is_configuration_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "globbing: true\n").unwrap();

        let err = ConfigLoader::load_file(&config_path).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("globbing"));
    }

    #[test]
    fn test_load_valid_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "case_sensitivity: insensitive\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.case_sensitivity, Some(CaseSensitivity::Insensitive));
    }

    #[test]
    fn test_discover_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "allow_parent_directory: false\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let source = ConfigLoader::discover(&nested).unwrap().unwrap();
        assert_eq!(source.path, temp_dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(source.config.allow_parent_directory, Some(false));
    }

    #[test]
    fn test_discover_prefers_nearest() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "follow_symlinks: false\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("inner");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "follow_symlinks: true\n").unwrap();

        let source = ConfigLoader::discover(&nested).unwrap().unwrap();
        assert_eq!(source.config.follow_symlinks, Some(true));
    }
}
