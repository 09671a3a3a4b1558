//! Containment lists of files and directories.
//!
//! A [`PathSet`] is built once from user-supplied paths, typically command
//! line arguments, and then asked whether candidate paths are covered by it.
//! A candidate is covered when it is one of the listed paths or, if parent
//! directory matching is allowed, when it lies below a listed directory. An
//! empty set covers everything.

use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::{normalize_directory, FileSystemProbe, OsProbe};

/// How path strings are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseSensitivity {
    /// Paths match only if their bytes are identical.
    #[default]
    Sensitive,
    /// Paths are lowercased before comparison.
    Insensitive,
}

impl CaseSensitivity {
    /// Parses a case sensitivity mode from a string.
    ///
    /// Recognizes `sensitive` and `insensitive` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a validation error for any other value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathset::CaseSensitivity;
    ///
    /// assert_eq!(CaseSensitivity::parse("Insensitive").unwrap(), CaseSensitivity::Insensitive);
    /// assert!(CaseSensitivity::parse("maybe").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "sensitive" => Ok(Self::Sensitive),
            "insensitive" => Ok(Self::Insensitive),
            _ => Err(Error::Validation {
                field: "case_sensitivity".into(),
                message: format!("Invalid value: '{s}' (expected sensitive/insensitive)"),
            }),
        }
    }

    fn fold<'a>(self, path: &'a str) -> Cow<'a, str> {
        match self {
            Self::Sensitive => Cow::Borrowed(path),
            Self::Insensitive => Cow::Owned(path.to_lowercase()),
        }
    }
}

/// Options fixed when a [`PathSet`] is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// How entries and candidates are compared.
    pub case_sensitivity: CaseSensitivity,
    /// Whether [`PathSet::contains_default`] accepts paths below a listed
    /// directory.
    pub allow_parent_directory: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_sensitivity: CaseSensitivity::Sensitive,
            allow_parent_directory: true,
        }
    }
}

/// A list of files and directories that candidate paths are tested against.
///
/// The set is immutable once built. When the probe is `Send + Sync` so is the
/// set, and any number of threads may query it at once without locking.
///
/// # Examples
///
/// ```
/// use pathset::path::MemoryProbe;
/// use pathset::PathSet;
///
/// let probe = MemoryProbe::new("/repo").with_directory("/repo/src");
/// let set = PathSet::with_probe(["src"], probe).unwrap();
///
/// assert!(set.contains("/repo/src/main.rs", true).unwrap());
/// assert!(!set.contains("/repo/src/main.rs", false).unwrap());
/// assert!(!set.contains("/repo/lib/util.rs", true).unwrap());
/// assert!(set.contains("/repo/src", false).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PathSet<P = OsProbe> {
    /// Resolved entries in input order; directories in canonical form.
    entries: Vec<String>,
    /// The subset of `entries` that named directories at build time.
    directories: HashSet<String>,
    options: MatchOptions,
    probe: P,
}

impl PathSet<OsProbe> {
    /// Build a set against the real filesystem, resolving relative paths
    /// from the process working directory.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while resolving or probing a path.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathset::PathSet;
    ///
    /// let everything = PathSet::new(Vec::<String>::new()).unwrap();
    /// assert!(everything.is_empty());
    /// assert!(everything.contains("/any/path", false).unwrap());
    /// ```
    pub fn new<I>(paths: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::with_probe(paths, OsProbe::new())
    }
}

impl<P: FileSystemProbe> PathSet<P> {
    /// Build a set using `probe` for resolution and directory checks.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while resolving or probing a path.
    pub fn with_probe<I>(paths: I, probe: P) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::with_options(paths, probe, MatchOptions::default())
    }

    /// Build a set with explicit match options.
    ///
    /// Each path is resolved, then checked for being a directory. Directories
    /// are stored in canonical directory form. Paths that do not exist are
    /// kept as plain paths. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while resolving or probing a path; no
    /// partially built set is returned.
    pub fn with_options<I>(paths: I, probe: P, options: MatchOptions) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut directories = HashSet::new();

        for raw in paths {
            let raw = raw.as_ref();
            let mut resolved = probe.resolve(raw)?;
            if probe.is_dir(&resolved)? {
                resolved = normalize_directory(&resolved);
                directories.insert(resolved.clone());
            }
            log::trace!("path set entry {raw} -> {resolved}");
            entries.push(resolved);
        }

        log::debug!(
            "built path set with {} entries ({} directories, {:?})",
            entries.len(),
            directories.len(),
            options.case_sensitivity
        );

        Ok(Self {
            entries,
            directories,
            options,
            probe,
        })
    }

    /// Test whether `path` is covered by this set.
    ///
    /// An empty set covers every path and never consults the probe. Otherwise
    /// `path` is resolved, given a trailing separator if it is a directory,
    /// and compared with each entry in order. It is covered if it equals an
    /// entry, or if `allow_parent_directory` is set and it starts with a
    /// directory entry.
    ///
    /// # Errors
    ///
    /// Returns any error raised while resolving or probing `path`. A failed
    /// query is never reported as `false`.
    pub fn contains(&self, path: &str, allow_parent_directory: bool) -> Result<bool> {
        if self.is_empty() {
            return Ok(true);
        }

        let mut candidate = self.probe.resolve(path)?;
        if self.probe.is_dir(&candidate)? {
            candidate = normalize_directory(&candidate);
        }

        let case = self.options.case_sensitivity;
        let candidate_key = case.fold(&candidate);

        for entry in &self.entries {
            let entry_key = case.fold(entry);
            if entry_key == candidate_key {
                log::trace!("{candidate} matches entry {entry}");
                return Ok(true);
            }
            // Directory entries end with a separator, so this prefix test
            // only ever matches at a component boundary.
            if allow_parent_directory
                && self.directories.contains(entry)
                && candidate_key.starts_with(entry_key.as_ref())
            {
                log::trace!("{candidate} is below directory entry {entry}");
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Test whether `path` is covered, using the set's configured
    /// parent-directory behaviour (on by default).
    ///
    /// # Errors
    ///
    /// See [`contains`](Self::contains).
    pub fn contains_default(&self, path: &str) -> Result<bool> {
        self.contains(path, self.options.allow_parent_directory)
    }

    /// Returns the probe this set resolves paths with.
    pub fn probe(&self) -> &P {
        &self.probe
    }
}

impl<P> PathSet<P> {
    /// Whether the set was built from zero paths.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Resolved entries in input order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Whether `entry` was recorded as a directory.
    #[must_use]
    pub fn is_directory_entry(&self, entry: &str) -> bool {
        self.directories.contains(entry)
    }

    /// The options this set was built with.
    #[must_use]
    pub fn options(&self) -> MatchOptions {
        self.options
    }
}
