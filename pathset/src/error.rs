//! Error types for the pathset library.
//!
//! Path sets define no failure modes of their own; every error here comes
//! from resolving a path, probing the filesystem, or loading configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathset error.
///
/// # Examples
///
/// ```
/// use pathset::{Error, Result};
///
/// fn example_operation() -> Result<bool> {
///     Ok(true)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathset library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path could not be resolved to an absolute form.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A path does not exist.
    #[error("path not found: {}", path.display())]
    PathNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathset::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathNotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::PathNotFound { .. } => true,
            Self::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathset::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Map an I/O error raised while touching `path` to the closest variant.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::PathNotFound {
                path: path.to_path_buf(),
            },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::Path;

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/path"),
            reason: "contains invalid UTF-8".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/invalid/path"));
        assert!(display.contains("invalid UTF-8"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "case_sensitivity".to_string(),
            message: "expected sensitive or insensitive".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("case_sensitivity"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::Other, "disk on fire");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_from_io_maps_kinds() {
        let path = Path::new("/some/path");

        let err = Error::from_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert!(err.is_not_found());

        let err = Error::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(err.is_permission_denied());

        let err = Error::from_io(path, io::Error::from(io::ErrorKind::Interrupted));
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<bool> {
            Err(Error::PathNotFound {
                path: PathBuf::from("/missing"),
            })
        }

        assert!(returns_result().is_err());
    }
}
