//! # smart-clean
//!
//! A filesystem clean-up engine: removes content-duplicate files, temporary
//! artifacts and directories left empty, with a dry-run mode that reports
//! exactly what a live run would do.
//!
//! ## Overview
//!
//! Given a list of root directories, smart-clean walks each root once and:
//!
//! - **Temporary artifacts**: deletes files such as `*.tmp`, `*.log`, `*.pyc`
//!   and whole cache directories such as `__pycache__`, without descending
//!   into them
//! - **Duplicates**: hashes files with BLAKE3 and keeps only the first-seen
//!   copy of each set of identical files
//! - **Empty directories**: removes directories that end up with no children,
//!   bottom-up, repeating until a pass removes nothing
//!
//! ## Architecture
//!
//! - [`cli`]: Command-line interface definitions using clap
//! - [`commands`]: Subcommand dispatch and summary output
//! - [`clean`]: The clean-up engine (classification, scanning, duplicate
//!   resolution, empty-directory collapsing, deletion, reporting)
//! - [`error`]: Error types and handling with thiserror + miette
//!
//! Internal modules (not part of the public API):
//! - `hashing`: Streaming BLAKE3 file hashing
//! - `logging`: Verbosity-aware stderr/stdout logging
//!
//! ## Library Usage
//!
//! ```no_run
//! use smart_clean::clean::Cleaner;
//!
//! let report = Cleaner::builder()
//!     .root("target-dir")
//!     .remove_temp(true)
//!     .remove_empty(true)
//!     .dry_run(true)
//!     .build()?
//!     .run();
//!
//! let summary = report.summary();
//! println!(
//!     "{} files, {} dirs, {} bytes",
//!     summary.files_count, summary.dirs_count, summary.bytes_reclaimed
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Per-item problems (missing roots, unreadable files, failed deletions) are
//! collected in the [`clean::Report`] and never abort a run. Only an invalid
//! configuration is returned as an error, before anything is scanned.

pub mod clean;
pub mod cli;
pub mod commands;
pub mod error;

// Internal modules
mod hashing;
mod logging;
