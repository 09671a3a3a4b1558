//! Command to check a single path against the containment list.

use crate::error::CliError;
use crate::utils::{allow_parent_directory, build_path_set, GlobalOptions};
use clap::Args;

/// Check whether a path is covered by a list of files and directories.
///
/// Exits 0 when covered and 1 when not.
#[derive(Args)]
pub struct CheckCommand {
    /// Path to check
    #[arg(value_name = "CANDIDATE")]
    pub candidate: String,

    /// Files and directories the candidate may be covered by (none: everything)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    /// Only accept exact matches, not paths below a listed directory
    #[arg(long)]
    pub strict: bool,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let set = build_path_set(global, &self.paths)?;
        let allow_parent = allow_parent_directory(&set, self.strict);

        if set.contains(&self.candidate, allow_parent)? {
            log::info!("{} is covered", self.candidate);
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} is not covered",
                self.candidate
            )))
        }
    }
}
