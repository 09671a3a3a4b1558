//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CheckCommand, FilterCommand, ListCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for testing paths against a list of files and directories.
#[derive(Parser)]
#[command(name = "pathset")]
#[command(version, about = "Test whether paths are covered by a list of files and directories", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Configuration file to use instead of discovering pathset.yaml
    #[arg(long, value_name = "FILE", global = true, env = "PATHSET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Compare paths case-insensitively
    #[arg(long, global = true)]
    pub ignore_case: bool,

    /// Resolve symlinks in paths that exist
    #[arg(long, global = true)]
    pub follow_symlinks: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Check whether a path is covered (exit 0) or not (exit 1)
    Check(CheckCommand),

    /// Print the paths read from stdin that are covered
    Filter(FilterCommand),

    /// Show how each path resolves and whether it is a directory
    List(ListCommand),
}
