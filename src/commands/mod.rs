//! Implementation of smart-clean subcommands.
//!
//! `mod.rs` serves as a thin dispatcher; command logic lives in dedicated
//! modules.

use std::path::{Path, PathBuf};

use crate::clean::Summary;
use crate::cli::{Cli, Commands};
use crate::error::{CleanError, Result};

pub(crate) mod clean;

pub use clean::{Clean, CleanBuilder};


/// Execute commands based on the parsed CLI arguments.
///
/// Returns the run summary; its [`Summary::exit_status`] is the process
/// exit status.
pub fn execute(cli: &Cli) -> Result<Summary> {
    execute_with_dir(cli, None)
}

/// Execute commands with an explicit working directory.
pub fn execute_with_dir(cli: &Cli, working_dir: Option<&Path>) -> Result<Summary> {
    let quiet = cli.global_opts().quiet();
    let verbose = if quiet {
        0
    } else {
        cli.global_opts().verbose()
    };

    let current_dir = if let Some(dir) = working_dir {
        dir.to_path_buf()
    } else {
        std::env::current_dir().map_err(|source| CleanError::IoError {
            path: PathBuf::from("."),
            source,
        })?
    };

    match cli.command() {
        Commands::Clean {
            directories,
            dupes,
            tmp,
            empty,
            dry_run,
            max_passes,
        } => Clean::builder()
            .directories(directories)
            .dupes(*dupes)
            .tmp(*tmp)
            .empty(*empty)
            .dry_run(*dry_run)
            .max_passes(*max_passes)
            .verbose(verbose)
            .quiet(quiet)
            .working_dir(&current_dir)
            .build()?
            .run(),
    }
}
