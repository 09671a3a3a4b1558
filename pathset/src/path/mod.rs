//! Path resolution and directory probing.
//!
//! This module holds everything a [`PathSet`](crate::PathSet) needs from the
//! outside world, kept behind the [`FileSystemProbe`] trait so the matching
//! logic can be exercised without a real filesystem.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization is lexical. It expands `~`, makes relative paths absolute
//! against a working directory, and folds `.` and `..` components. See
//! [`normalize`].
//!
//! ## Canonicalization
//!
//! Canonicalization follows symlinks to the real on-disk path. It is off by
//! default and only applies to paths that exist. See [`canonicalize`].
//!
//! ## Directory form
//!
//! A directory entry is stored with exactly one trailing separator, produced
//! by [`normalize_directory`]. That separator is what keeps a listed `/a/b/`
//! from matching a sibling such as `/a/bc`.
//!
//! # Examples
//!
//! ```
//! use pathset::path::{normalize_directory, FileSystemProbe, MemoryProbe};
//!
//! let probe = MemoryProbe::new("/repo").with_directory("/repo/src");
//! let resolved = probe.resolve("./src/").unwrap();
//! assert_eq!(resolved, "/repo/src");
//! assert_eq!(normalize_directory(&resolved), "/repo/src/");
//! ```

pub mod canonicalize;
pub mod normalize;
pub mod probe;

pub use probe::{FileSystemProbe, MemoryProbe, OsProbe};

use std::path::MAIN_SEPARATOR;

/// Put a directory path into canonical directory form.
///
/// All trailing separators are stripped and exactly one is appended, so
/// `/a/b`, `/a/b/` and `/a/b//` all become `/a/b/`. The root becomes `/`.
///
/// # Examples
///
/// ```
/// use pathset::path::normalize_directory;
///
/// assert_eq!(normalize_directory("/a/b"), "/a/b/");
/// assert_eq!(normalize_directory("/a/b//"), "/a/b/");
/// assert_eq!(normalize_directory("/"), "/");
/// ```
#[must_use]
pub fn normalize_directory(path: &str) -> String {
    let trimmed = path.trim_end_matches(is_separator);
    let mut dir = String::with_capacity(trimmed.len() + 1);
    dir.push_str(trimmed);
    dir.push(MAIN_SEPARATOR);
    dir
}

fn is_separator(c: char) -> bool {
    c == '/' || c == MAIN_SEPARATOR
}
