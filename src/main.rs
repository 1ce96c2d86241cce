//! # smart-clean CLI
//!
//! The command-line interface for smart-clean, a filesystem clean-up tool
//! that removes duplicate files, temporary artifacts and empty directories.
//!
//! ## Commands
//!
//! - **clean**: Scan directories and remove what the selected flags target
//!
//! ## Quick Start
//!
//! ```bash
//! # See what would go, without deleting anything
//! smart-clean clean ~/projects --tmp --empty --dry-run
//!
//! # Remove duplicates across two directories, keeping the first copy
//! smart-clean clean photos backup/photos --dupes
//! ```
//!
//! ## Environment Variables
//!
//! - `SMART_CLEAN_VERBOSE`: Enable verbose output
//! - `SMART_CLEAN_QUIET`: Silence all output except errors
//! - `SMART_CLEAN_DRY_RUN`: Simulate deletions
//!
//! See `smart-clean clean --help` for the rest.
//!
//! ## Exit Status
//!
//! 0 when no error was recorded, 1 otherwise. Skipped items never fail a run.

use std::io::IsTerminal;
use std::process::ExitCode;

use smart_clean::cli::Cli;

fn main() -> miette::Result<ExitCode> {
    // Install miette's fancy panic and error report handler
    miette::set_panic_hook();

    // Configure miette handler based on terminal capabilities
    if std::io::stderr().is_terminal() {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::unicode_nocolor())
                    .with_context_lines(3),
            )
        }))?;
    } else {
        // Use a simpler handler for non-TTY environments (CI, logs, etc.)
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::none())
                    .with_context_lines(0),
            )
        }))?;
    }

    let cli = Cli::parse_args();

    let summary = smart_clean::commands::execute(&cli)?;

    Ok(ExitCode::from(summary.exit_status()))
}
