//! Symlink resolution for on-disk paths.
//!
//! Only [`OsProbe`](crate::path::OsProbe) uses this, and only when symlink
//! following is switched on. Paths that do not exist yet keep their lexical
//! form so that a list may name files that will be created later.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolve every symlink in an existing path.
///
/// # Errors
///
/// Returns `PathNotFound` if the path does not exist, `PermissionDenied` if
/// a component cannot be read, or `Io` for anything else.
///
/// # Examples
///
/// ```no_run
/// use pathset::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| Error::from_io(path, e))
}

/// Resolve symlinks if the path exists, otherwise return it unchanged.
///
/// A path below a regular file does not exist either and is returned
/// unchanged.
///
/// # Errors
///
/// Returns an error for any failure other than a missing path.
///
/// # Examples
///
/// ```
/// use pathset::path::canonicalize::try_canonicalize;
/// use std::path::Path;
///
/// let missing = Path::new("/nonexistent/pathset/file");
/// assert_eq!(try_canonicalize(missing).unwrap(), missing);
/// ```
pub fn try_canonicalize(path: &Path) -> Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(canonical) => Ok(canonical),
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            log::trace!("not canonicalizing missing path {}", path.display());
            Ok(path.to_path_buf())
        }
        Err(e) => Err(Error::from_io(path, e)),
    }
}
