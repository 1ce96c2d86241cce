//! Error types for smart-clean.
//!
//! This module defines all error types used throughout smart-clean, using
//! a combination of `thiserror` for ergonomic error definitions and `miette`
//! for rich diagnostic output.
//!
//! # Error Handling Strategy
//!
//! - All errors derive from [`CleanError`]
//! - Failures tied to a single file or directory never abort a run: they are
//!   stored in the [`Report`](crate::clean::Report) as errors or skips
//! - Only configuration problems are returned as `Err` before scanning starts
//! - Errors are automatically converted to `miette::Result` for CLI output
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use smart_clean::error::{CleanError, Result};
//!
//! fn check_root(path: &Path) -> Result<()> {
//!     if !path.exists() {
//!         return Err(CleanError::RootNotFound(path.to_path_buf()));
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error types that can occur in smart-clean operations
#[derive(Error, Debug, Diagnostic)]
pub enum CleanError {
    /// A root directory passed by the caller does not exist.
    ///
    /// The root is skipped; every other root in the same run is still
    /// processed.
    #[error("Root not found: '{0}'")]
    #[diagnostic(
        code(smart_clean::root::not_found),
        help("Check the spelling of the directory or run from a different working directory.")
    )]
    RootNotFound(
        /// The normalized root path
        PathBuf,
    ),

    /// A root exists but is not a directory.
    #[error("Root is not a directory: '{0}'")]
    #[diagnostic(code(smart_clean::root::not_a_directory))]
    RootNotDirectory(
        /// The normalized root path
        PathBuf,
    ),

    /// A file or directory could not be read.
    ///
    /// Raised when hashing a file fails (permission denied, vanished file)
    /// or when a directory listing fails during the walk. Unreadable files
    /// are excluded from duplicate grouping.
    #[error("Unreadable '{path}'")]
    #[diagnostic(code(smart_clean::scan::unreadable))]
    Unreadable {
        /// The path that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The hasher was handed something other than a regular file.
    #[error("Invalid file type for '{path}': {message}")]
    #[diagnostic(code(smart_clean::hash::invalid_type))]
    InvalidFileType {
        /// The offending path
        path: PathBuf,
        /// Description of the file type issue
        message: String,
    },

    /// Removing a file or directory failed.
    #[error("Failed to delete '{path}'")]
    #[diagnostic(
        code(smart_clean::delete::failed),
        help("Ensure you have write permissions for the parent directory.")
    )]
    DeletionFailed {
        /// The path that could not be removed
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A directory gained a child between the emptiness check and removal.
    ///
    /// Recorded as a skip, never as an error.
    #[error("Directory no longer empty, left in place: '{0}'")]
    #[diagnostic(code(smart_clean::empty::race_skipped))]
    RaceSkipped(
        /// The directory that was left in place
        PathBuf,
    ),

    /// A path disappeared before it could be removed.
    ///
    /// Recorded as a skip, never as an error.
    #[error("Already gone, nothing to delete: '{0}'")]
    #[diagnostic(code(smart_clean::delete::vanished))]
    Vanished(
        /// The path that vanished
        PathBuf,
    ),

    /// The caller supplied an invalid configuration.
    ///
    /// This is the only error that aborts a run, and it is raised before
    /// any scanning begins.
    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(smart_clean::config::error),
        help("Check the directories and options passed to the clean command.")
    )]
    ConfigError(
        /// Description of the configuration error
        String,
    ),

    /// File system I/O error outside of per-item processing.
    #[error("I/O error accessing '{path}'")]
    #[diagnostic(code(smart_clean::io_error))]
    IoError {
        /// The path that caused the I/O error
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl CleanError {
    /// Render the error together with its source chain on one line.
    ///
    /// Used for the final report where each problem gets a single line.
    pub fn to_report_line(&self) -> String {
        let mut line = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            line.push_str(": ");
            line.push_str(&cause.to_string());
            source = cause.source();
        }
        line
    }
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CleanError>;

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::Path;

    use super::*;

    #[test]
    fn test_report_line_includes_source() {
        let err = CleanError::DeletionFailed {
            path: PathBuf::from("/tmp/x"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };
        assert_eq!(
            err.to_report_line(),
            "Failed to delete '/tmp/x': permission denied"
        );
    }

    #[test]
    fn test_report_line_without_source() {
        let err = CleanError::RootNotFound(Path::new("/missing").to_path_buf());
        assert_eq!(err.to_report_line(), "Root not found: '/missing'");
    }
}
