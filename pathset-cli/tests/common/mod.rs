//! Common test utilities for CLI integration tests.
//!
//! Provides an isolated temporary directory to run the `pathset` binary in,
//! plus helpers for building small file trees.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would change matching behaviour.
const PATHSET_VARS: [&str; 6] = [
    "PATHSET_CONFIG",
    "PATHSET_CASE_SENSITIVITY",
    "PATHSET_ALLOW_PARENT_DIRECTORY",
    "PATHSET_FOLLOW_SYMLINKS",
    "PATHSET_LOG_MODE",
    "PATHSET_OUTPUT_FORMAT",
];

/// Test environment rooted in a temporary directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Canonical path to the temporary directory
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new, empty test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");

        Self { temp_dir, root }
    }

    /// A `pathset` command running inside the environment with no
    /// `PATHSET_*` variables inherited.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathset").expect("Failed to find pathset binary");
        cmd.current_dir(&self.root);
        for var in PATHSET_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Create a directory (and parents) under the root.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Create a file (and parent directories) under the root.
    pub fn create_file(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, "").expect("Failed to create test file");
        path
    }

    /// Write `pathset.yaml` at the root.
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.root.join("pathset.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }

    /// Absolute path of `name` under the root, as a string.
    pub fn abs(&self, name: &str) -> String {
        path_str(&self.root.join(name))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a path to a `String`, panicking on non-UTF-8 test paths.
pub fn path_str(path: &Path) -> String {
    path.to_str().expect("Test paths are UTF-8").to_string()
}
