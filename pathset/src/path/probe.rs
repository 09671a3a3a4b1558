//! Filesystem probes.
//!
//! A [`PathSet`](crate::PathSet) never touches the filesystem directly. It
//! asks a [`FileSystemProbe`] to turn user input into an absolute path and to
//! say whether that path is a directory. [`OsProbe`] answers from the real
//! filesystem; [`MemoryProbe`] answers from a fixed in-memory description and
//! is what the unit tests use.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::{canonicalize, normalize};

/// Resolves paths and classifies them as directories.
///
/// Implementations must be deterministic: the same input under the same
/// working directory always resolves to the same string. Resolved paths
/// carry no trailing separator except for the root itself.
pub trait FileSystemProbe {
    /// Turn `path` into an absolute path string.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved.
    fn resolve(&self, path: &str) -> Result<String>;

    /// Report whether `path` names an existing directory.
    ///
    /// Missing paths are not directories and yield `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the filesystem refuses to answer, for example
    /// when a parent directory is unreadable.
    fn is_dir(&self, path: &str) -> Result<bool>;
}

impl<P: FileSystemProbe + ?Sized> FileSystemProbe for &P {
    fn resolve(&self, path: &str) -> Result<String> {
        (**self).resolve(path)
    }

    fn is_dir(&self, path: &str) -> Result<bool> {
        (**self).is_dir(path)
    }
}

/// Probe backed by the real filesystem.
///
/// # Examples
///
/// ```no_run
/// use pathset::path::{FileSystemProbe, OsProbe};
///
/// let probe = OsProbe::new().with_working_dir("/repo");
/// assert_eq!(probe.resolve("src/../lib").unwrap(), "/repo/lib");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OsProbe {
    /// Base for relative paths; the process cwd when unset.
    working_dir: Option<PathBuf>,
    /// Whether existing paths are canonicalized after normalization.
    follow_symlinks: bool,
}

impl OsProbe {
    /// Create a probe that resolves against the process working directory
    /// and leaves symlinks alone.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `dir` instead of the process cwd.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Configure whether existing paths have their symlinks resolved.
    #[must_use]
    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Whether this probe resolves symlinks.
    #[must_use]
    pub fn follows_symlinks(&self) -> bool {
        self.follow_symlinks
    }
}

impl FileSystemProbe for OsProbe {
    fn resolve(&self, path: &str) -> Result<String> {
        let raw = Path::new(path);
        let mut resolved = match &self.working_dir {
            Some(dir) => normalize::normalize_from(raw, dir)?,
            None => normalize::normalize(raw)?,
        };
        if self.follow_symlinks {
            resolved = canonicalize::try_canonicalize(&resolved)?;
        }
        Ok(normalize::as_utf8(&resolved)?.to_string())
    }

    fn is_dir(&self, path: &str) -> Result<bool> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(metadata.is_dir()),
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                Ok(false)
            }
            Err(e) => Err(Error::from_io(Path::new(path), e)),
        }
    }
}

/// Probe backed by an in-memory description of the filesystem.
///
/// Resolution is purely lexical against a fixed working directory. A path is
/// a directory if it, or any path below it, was registered with
/// [`with_directory`](Self::with_directory).
///
/// # Examples
///
/// ```
/// use pathset::path::{FileSystemProbe, MemoryProbe};
///
/// let probe = MemoryProbe::new("/repo").with_directory("/repo/src");
/// assert_eq!(probe.resolve("src").unwrap(), "/repo/src");
/// assert!(probe.is_dir("/repo/src").unwrap());
/// assert!(probe.is_dir("/repo").unwrap());
/// assert!(!probe.is_dir("/repo/src/main.rs").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct MemoryProbe {
    working_dir: PathBuf,
    directories: BTreeSet<String>,
    unreadable: BTreeSet<String>,
}

impl MemoryProbe {
    /// Create an empty probe whose relative paths resolve against `working_dir`.
    #[must_use]
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            directories: BTreeSet::new(),
            unreadable: BTreeSet::new(),
        }
    }

    /// Register `dir` and all of its ancestors as directories.
    ///
    /// A `dir` that cannot be resolved lexically is skipped with a warning.
    #[must_use]
    pub fn with_directory(mut self, dir: &str) -> Self {
        match self.resolve(dir) {
            Ok(resolved) => {
                for ancestor in Path::new(&resolved).ancestors() {
                    if let Some(text) = ancestor.to_str() {
                        self.directories.insert(text.to_string());
                    }
                }
            }
            Err(e) => log::warn!("ignoring directory {dir}: {e}"),
        }
        self
    }

    /// Make `is_dir` fail with `PermissionDenied` for `path`.
    #[must_use]
    pub fn with_unreadable(mut self, path: &str) -> Self {
        let resolved = self.resolve(path).unwrap_or_else(|_| path.to_string());
        self.unreadable.insert(resolved);
        self
    }
}

impl FileSystemProbe for MemoryProbe {
    fn resolve(&self, path: &str) -> Result<String> {
        let resolved = normalize::normalize_from(Path::new(path), &self.working_dir)?;
        Ok(normalize::as_utf8(&resolved)?.to_string())
    }

    fn is_dir(&self, path: &str) -> Result<bool> {
        if self.unreadable.contains(path) {
            return Err(Error::PermissionDenied {
                path: PathBuf::from(path),
            });
        }
        Ok(self.directories.contains(path))
    }
}
