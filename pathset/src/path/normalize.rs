//! Lexical path normalization.
//!
//! Everything here works on the path text alone; the filesystem is never
//! consulted. Both probes build their `resolve` on top of [`normalize_from`].

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand a leading tilde (`~` or `~/...`) to the home directory.
///
/// Any other name starting with `~`, such as `~notes.txt` or `~user/path`,
/// is an ordinary relative path and is returned unchanged.
///
/// # Errors
///
/// Returns an error if the path is not valid UTF-8 or the home directory
/// is needed but cannot be determined.
///
/// # Examples
///
/// ```
/// use pathset::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// let untouched = expand_tilde(Path::new("~notes.txt")).unwrap();
/// assert_eq!(untouched, Path::new("~notes.txt"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let text = as_utf8(path)?;

    let tail = match text.strip_prefix('~') {
        Some("") => "",
        Some(rest) => match rest.strip_prefix('/').or_else(|| rest.strip_prefix('\\')) {
            Some(tail) => tail,
            None => return Ok(path.to_path_buf()),
        },
        None => return Ok(path.to_path_buf()),
    };

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if tail.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(tail))
    }
}

/// Fold `.` and `..` components out of an absolute path.
///
/// A `..` at the root stays at the root, as it does in the kernel.
///
/// # Examples
///
/// ```
/// use pathset::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(resolve_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(resolve_components(Path::new("/../etc")), PathBuf::from("/etc"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    // Number of normal components currently pushed; `..` may only pop these.
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => result.push(prefix.as_os_str()),
            Component::RootDir => result.push(component),
            Component::CurDir => {}
            Component::Normal(name) => {
                result.push(name);
                depth += 1;
            }
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                }
            }
        }
    }

    result
}

/// Normalize a path against an explicit working directory.
///
/// Expands `~`, joins relative paths onto `cwd`, then folds `.` and `..`.
/// The result depends only on `path` and `cwd`, which keeps resolution
/// deterministic for a fixed working directory.
///
/// # Errors
///
/// Returns an error if tilde expansion fails.
///
/// # Examples
///
/// ```
/// use pathset::path::normalize::normalize_from;
/// use std::path::{Path, PathBuf};
///
/// let normalized = normalize_from(Path::new("src/../lib"), Path::new("/repo")).unwrap();
/// assert_eq!(normalized, PathBuf::from("/repo/lib"));
/// ```
pub fn normalize_from(path: &Path, cwd: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    };

    Ok(resolve_components(&absolute))
}

/// Normalize a path against the process working directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be read, or for any
/// reason listed on [`normalize_from`].
///
/// # Examples
///
/// ```no_run
/// use pathset::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("./src")).unwrap();
/// assert!(normalized.is_absolute());
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Cannot get current directory: {e}"),
    })?;
    normalize_from(path, &cwd)
}

/// Borrow a path as UTF-8 text.
///
/// Path sets compare paths as strings, so non-UTF-8 paths are rejected
/// instead of being lossily converted.
///
/// # Errors
///
/// Returns an error if the path is not valid UTF-8.
pub fn as_utf8(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })
}
