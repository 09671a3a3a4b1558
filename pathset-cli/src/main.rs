//! Main entry point for the pathset CLI.
//!
//! Commands:
//! - `check`: Check whether one path is covered by a list
//! - `filter`: Keep the covered paths from stdin
//! - `list`: Show the resolved entries of a list

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = pathset::init_logger(cli.verbose, cli.quiet);
    let quiet = logger.level() == pathset::LogLevel::Quiet;
    if let Err(e) = logger.install() {
        eprintln!("Warning: cannot install logger: {e}");
    }

    let global = GlobalOptions {
        config: cli.config,
        ignore_case: cli.ignore_case,
        follow_symlinks: cli.follow_symlinks,
    };

    let result = match cli.command {
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Filter(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
