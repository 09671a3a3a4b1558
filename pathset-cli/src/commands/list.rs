//! List command implementation.
//!
//! Shows how each given path was resolved and whether it was recorded as a
//! directory, in text or JSON form.

use crate::error::CliError;
use crate::utils::{build_path_set, GlobalOptions};
use clap::{Args, ValueEnum};
use pathset::PathSet;
use serde::Serialize;
use std::io::Write;

/// List the resolved entries of a containment list.
#[derive(Args)]
pub struct ListCommand {
    /// Files and directories to resolve
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Output format
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "PATHSET_OUTPUT_FORMAT",
        ignore_case = true
    )]
    pub format: OutputFormat,
}

/// Output format for the list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `KIND<TAB>PATH` line per entry
    Text,
    /// JSON array of entries
    Json,
}

/// Kind of a resolved entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Recorded as a directory; covers paths below it.
    Directory,
    /// Anything else, including paths that do not exist.
    File,
}

/// One resolved entry as printed by `list`.
#[derive(Debug, Serialize)]
pub struct EntryView<'a> {
    /// Resolved path.
    pub path: &'a str,
    /// Entry kind.
    pub kind: EntryKind,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let set = build_path_set(global, &self.paths)?;
        let entries = entry_views(&set);

        match self.format {
            OutputFormat::Text => format_as_text(&entries),
            OutputFormat::Json => format_as_json(&entries),
        }
    }
}

fn entry_views<P>(set: &PathSet<P>) -> Vec<EntryView<'_>> {
    set.entries()
        .map(|path| EntryView {
            path,
            kind: if set.is_directory_entry(path) {
                EntryKind::Directory
            } else {
                EntryKind::File
            },
        })
        .collect()
}

fn format_as_text(entries: &[EntryView<'_>]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    for entry in entries {
        let kind = match entry.kind {
            EntryKind::Directory => "dir",
            EntryKind::File => "file",
        };
        writeln!(handle, "{kind}\t{}", entry.path)?;
    }

    Ok(())
}

fn format_as_json(entries: &[EntryView<'_>]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, entries)
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    writeln!(handle)?;

    Ok(())
}
