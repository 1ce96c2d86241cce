//! Duplicate, temporary-file and empty-directory clean-up.
//!
//! This module provides the clean-up engine:
//! - Temporary artifacts (`*.tmp`, `*.log`, `__pycache__`, ...) are removed
//!   by name
//! - Files with identical BLAKE3 digests are reduced to their first-seen copy
//! - Directories left empty are collapsed bottom-up until nothing changes
//!
//! Every stage honours dry-run mode, which reports exactly what a live run
//! would do without touching the filesystem.
//!
//! # Example
//!
//! ```no_run
//! use smart_clean::clean::Cleaner;
//!
//! let cleaner = Cleaner::builder()
//!     .root("downloads")
//!     .root("~/projects")
//!     .find_duplicates(true)
//!     .remove_temp(true)
//!     .remove_empty(true)
//!     .dry_run(true)
//!     .build()?;
//!
//! let report = cleaner.run();
//! println!("Would free {} bytes", report.summary().bytes_reclaimed);
//! assert_eq!(report.exit_status(), 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod classify;
pub mod config;
mod delete;
pub mod duplicates;
mod empty;
mod report;
mod scan;
mod size;

pub use config::{Cleaner, CleanerBuilder, DEFAULT_MAX_EMPTY_PASSES, normalize_root};
pub use delete::Removal;
pub use report::{DeletionRecord, EntryKind, Outcome, Report, Summary};
pub use size::format_size;
