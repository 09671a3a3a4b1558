//! Library exports for pathset-cli.
//!
//! Exposes the CLI structure so it can be inspected by tooling and tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
