//! Command to filter candidate paths read from stdin.

use crate::error::CliError;
use crate::utils::{allow_parent_directory, build_path_set, GlobalOptions};
use clap::Args;
use std::io::{self, BufRead, Write};

/// Print the candidate paths from stdin that are covered by the list.
///
/// Candidates are read one per line and printed unchanged. A candidate that
/// cannot be checked, including one that is not valid UTF-8, is reported on
/// stderr and makes the command fail once all input has been processed.
#[derive(Args)]
pub struct FilterCommand {
    /// Files and directories to keep candidates from (none: keep everything)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Only keep exact matches, not paths below a listed directory
    #[arg(long)]
    pub strict: bool,
}

impl FilterCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let set = build_path_set(global, &self.paths)?;
        let allow_parent = allow_parent_directory(&set, self.strict);

        let stdin = io::stdin();
        let mut input = stdin.lock();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let mut failures = 0;
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            if buf.last() == Some(&b'\n') {
                buf.pop();
                if buf.last() == Some(&b'\r') {
                    buf.pop();
                }
            }
            if buf.is_empty() {
                continue;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    log::error!("cannot check {}: {e}", String::from_utf8_lossy(&buf));
                    failures += 1;
                    continue;
                }
            };

            match set.contains(line, allow_parent) {
                Ok(true) => writeln!(out, "{line}")?,
                Ok(false) => log::debug!("skipping {line}"),
                Err(e) => {
                    log::error!("cannot check {line}: {e}");
                    failures += 1;
                }
            }
        }
        out.flush()?;

        if failures > 0 {
            return Err(CliError::QueryFailures(failures));
        }
        Ok(())
    }
}
