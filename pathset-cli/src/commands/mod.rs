//! CLI command implementations.
//!
//! - `check`: Check whether one path is covered
//! - `filter`: Keep the covered paths from stdin
//! - `list`: Show the resolved entries of a list

pub mod check;
pub mod filter;
pub mod list;

pub use check::CheckCommand;
pub use filter::FilterCommand;
pub use list::ListCommand;
