//! Command-line interface definitions for smart-clean.
//!
//! This module defines the CLI structure using clap, including all subcommands
//! and their arguments. The main entry point is the [`Cli`] struct.
//!
//! # Example
//!
//! ```no_run
//! use smart_clean::cli::{Cli, Commands};
//!
//! // Parse command-line arguments
//! let cli = Cli::parse_args();
//!
//! match cli.command() {
//!     Commands::Clean { directories, .. } => {
//!         println!("Cleaning {} directories", directories.len());
//!     }
//! }
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::clean::DEFAULT_MAX_EMPTY_PASSES;
use crate::error::{CleanError, Result};

#[cfg(test)]
mod tests;

/// Main command-line interface for smart-clean.
///
/// This struct represents the top-level CLI configuration, containing both
/// global options that apply to all commands and the specific subcommand
/// to execute.
#[derive(Parser)]
#[command(
    name = "smart-clean",
    bin_name = "smart-clean",
    author,
    version,
    about = "Remove duplicate files, temporary artifacts and empty directories",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

/// Global options that apply to all smart-clean commands.
#[derive(Parser)]
pub struct GlobalOpts {
    /// Enable verbose output (use multiple times for more verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, env = "SMART_CLEAN_VERBOSE")]
    verbose: u8,

    /// Silence all output except for errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        env = "SMART_CLEAN_QUIET"
    )]
    quiet: bool,
}

impl GlobalOpts {
    /// Create a new builder for constructing `GlobalOpts` programmatically.
    pub fn builder() -> GlobalOptsBuilder {
        GlobalOptsBuilder::default()
    }

    /// Get the verbose level
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Check if quiet mode is enabled
    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

/// Builder for constructing `GlobalOpts` programmatically.
#[derive(Default)]
pub struct GlobalOptsBuilder {
    verbose: u8,
    quiet: bool,
}

impl GlobalOptsBuilder {
    /// Set the verbosity level (0 = normal, 1+ = verbose).
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable or disable quiet mode.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Build the `GlobalOpts` instance with the configured values.
    pub fn build(self) -> GlobalOpts {
        GlobalOpts {
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

impl Cli {
    /// Get the global options
    pub fn global_opts(&self) -> &GlobalOpts {
        &self.global_opts
    }

    /// Get the command
    pub fn command(&self) -> &Commands {
        &self.command
    }

    /// Create a builder for programmatic construction
    pub fn builder() -> CliBuilder {
        CliBuilder::default()
    }

    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Builder for [`Cli`]
#[derive(Debug, Default)]
pub struct CliBuilder {
    verbose: u8,
    quiet: bool,
    command: Option<Commands>,
}

impl CliBuilder {
    /// Set the verbose level
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable quiet mode
    pub fn quiet(mut self, enabled: bool) -> Self {
        self.quiet = enabled;
        self
    }

    /// Set the command
    pub fn command(mut self, command: Commands) -> Self {
        self.command = Some(command);
        self
    }

    /// Build the Cli instance
    pub fn build(self) -> Result<Cli> {
        let command = self
            .command
            .ok_or_else(|| CleanError::ConfigError("Command is required".to_string()))?;

        Ok(Cli {
            global_opts: GlobalOpts::builder()
                .verbose(self.verbose)
                .quiet(self.quiet)
                .build(),
            command,
        })
    }
}

/// Available smart-clean subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Smart clean-up of one or more directories
    ///
    /// Depending on the flags given:
    /// - `--tmp` removes temporary files (*.tmp, *.log, *.pyc, ...) and cache
    ///   directories (__pycache__, .pytest_cache, ...)
    /// - `--dupes` keeps the first copy of every set of identical files and
    ///   removes the rest
    /// - `--empty` removes directories left empty afterwards
    ///
    /// The directories passed on the command line are never removed
    /// themselves. Exits with status 1 if any error was recorded.
    Clean {
        /// Directories to scan (default: current directory)
        #[arg(default_value = ".")]
        directories: Vec<PathBuf>,

        /// Find and remove duplicate files
        #[arg(long, env = "SMART_CLEAN_DUPES")]
        dupes: bool,

        /// Remove temporary files and folders
        #[arg(long, env = "SMART_CLEAN_TMP")]
        tmp: bool,

        /// Remove empty directories after cleaning
        #[arg(long, env = "SMART_CLEAN_EMPTY")]
        empty: bool,

        /// Show what would be done without actually deleting files
        #[arg(long, env = "SMART_CLEAN_DRY_RUN")]
        dry_run: bool,

        /// Upper bound on empty-directory passes
        #[arg(long, default_value_t = DEFAULT_MAX_EMPTY_PASSES, env = "SMART_CLEAN_MAX_PASSES")]
        max_passes: usize,
    },
}
