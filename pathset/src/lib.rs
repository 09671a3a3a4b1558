#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathset
//!
//! A library for deciding whether a path is covered by a list of files and
//! directories, such as the paths a user passed on the command line.
//!
//! A path is covered when it is one of the listed paths or, optionally, when
//! it lies below a listed directory. An empty list covers every path, so a
//! tool can treat "no paths given" as "operate on everything".
//!
//! ## Core Types
//!
//! - [`PathSet`]: the containment list and its `contains` query
//! - [`FileSystemProbe`]: how paths are resolved and classified, with
//!   [`OsProbe`] for the real filesystem and [`MemoryProbe`] for tests
//! - [`MatchOptions`] and [`CaseSensitivity`]: comparison settings
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathset::{MemoryProbe, PathSet};
//!
//! let probe = MemoryProbe::new("/repo").with_directory("/repo/src");
//! let set = PathSet::with_probe(["src", "README.md"], probe).unwrap();
//!
//! assert!(set.contains("src/main.rs", true).unwrap());
//! assert!(set.contains("/repo/README.md", false).unwrap());
//! assert!(!set.contains("/repo/Cargo.toml", true).unwrap());
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod path_set;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{FileSystemProbe, MemoryProbe, OsProbe};
pub use path_set::{CaseSensitivity, MatchOptions, PathSet};
