use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use super::delete::{Executor, Removal};
use super::duplicates::{self, DuplicateGroups};
use super::empty;
use super::report::Report;
use super::scan::{self, ScanOptions};
use crate::error::{CleanError, Result};
use crate::logging::Logger;

/// Default upper bound on empty-directory passes.
pub const DEFAULT_MAX_EMPTY_PASSES: usize = 3;

/// A validated clean-up run over one or more root directories.
#[derive(Debug)]
pub struct Cleaner {
    /// Absolute, normalized roots in caller order
    roots: Vec<PathBuf>,
    /// Delete all but the first-seen copy of identical files
    find_duplicates: bool,
    /// Delete temporary files and directories
    remove_temp: bool,
    /// Delete directories left empty
    remove_empty: bool,
    /// Simulate deletions without touching the filesystem
    dry_run: bool,
    /// Upper bound on empty-directory passes
    max_empty_passes: usize,
    /// Verbosity level for diagnostics
    verbose: u8,
    /// Suppress informational logging when true
    quiet: bool,
}

impl Cleaner {
    /// Creates a new builder for [`Cleaner`]
    pub fn builder() -> CleanerBuilder {
        CleanerBuilder::default()
    }

    /// Get the normalized roots
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Check if duplicate removal is enabled
    pub fn find_duplicates(&self) -> bool {
        self.find_duplicates
    }

    /// Check if temporary file removal is enabled
    pub fn remove_temp(&self) -> bool {
        self.remove_temp
    }

    /// Check if empty-directory removal is enabled
    pub fn remove_empty(&self) -> bool {
        self.remove_empty
    }

    /// Check if dry run mode is enabled
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Get the maximum number of empty-directory passes
    pub fn max_empty_passes(&self) -> usize {
        self.max_empty_passes
    }

    /// Check if quiet mode is enabled
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            find_duplicates: self.find_duplicates,
            remove_temp: self.remove_temp,
            remove_empty: self.remove_empty,
        }
    }

    /// Main entry point for a clean-up run
    ///
    /// 1. **Walk**: every root is walked once, in order. Temporary items
    ///    found under a root are deleted as soon as its walk finishes, and
    ///    its remaining files are hashed.
    /// 2. **Duplicates**: once all roots are walked, every digest group with
    ///    two or more members keeps its first-seen file and deletes the rest.
    /// 3. **Empty directories**: directories seen during the walks are
    ///    collapsed bottom-up until a pass removes nothing.
    ///
    /// Failures never abort the run; they are collected in the returned
    /// [`Report`].
    pub fn run(&self) -> Report {
        let log = Logger::new(self.verbose, self.quiet);
        let mut report = Report::new();
        let mut executor = Executor::new(self.dry_run, log);
        let mut groups = DuplicateGroups::new();
        let mut directories = Vec::new();

        if self.dry_run {
            log.verbose(1, "Dry run: nothing will be deleted");
        }

        for root in &self.roots {
            if let Err(err) = check_root(root) {
                log.verbose(1, format!("Skipping root: {err}"));
                report.record_error(err);
                continue;
            }

            log.verbose(1, format!("Scanning {}", root.display()));
            let outcome = scan::walk(root, self.scan_options(), &mut report, &log);

            for candidate in outcome.temp_candidates {
                executor.delete(&candidate.path, candidate.removal, &mut report);
            }
            groups.extend(outcome.hashed_files);
            directories.extend(outcome.directories);
        }

        if self.find_duplicates {
            let resolutions = duplicates::resolve(groups);
            log.verbose(1, format!("Found {} duplicate groups", resolutions.len()));
            for resolution in resolutions {
                log.verbose(2, format!("  Keeping {}", resolution.keeper.display()));
                for duplicate in resolution.duplicates {
                    executor.delete(&duplicate, Removal::File, &mut report);
                }
            }
        }

        if self.remove_empty {
            log.verbose(
                1,
                format!("Checking {} directories for emptiness", directories.len()),
            );
            empty::collapse(
                directories,
                self.max_empty_passes,
                &mut executor,
                &mut report,
                &log,
            );
        }

        report
    }
}

fn check_root(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(CleanError::RootNotDirectory(root.to_path_buf())),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(CleanError::RootNotFound(root.to_path_buf()))
        }
        Err(source) => Err(CleanError::Unreadable {
            path: root.to_path_buf(),
            source,
        }),
    }
}

/// Builder for [`Cleaner`]
#[derive(Debug, Default)]
pub struct CleanerBuilder {
    roots: Vec<PathBuf>,
    find_duplicates: bool,
    remove_temp: bool,
    remove_empty: bool,
    dry_run: bool,
    max_empty_passes: Option<usize>,
    working_dir: Option<PathBuf>,
    verbose: u8,
    quiet: bool,
}

impl CleanerBuilder {
    /// Add a root directory
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.roots.push(path.into());
        self
    }

    /// Add several root directories
    pub fn roots<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Enable duplicate removal
    pub fn find_duplicates(mut self, enabled: bool) -> Self {
        self.find_duplicates = enabled;
        self
    }

    /// Enable temporary file removal
    pub fn remove_temp(mut self, enabled: bool) -> Self {
        self.remove_temp = enabled;
        self
    }

    /// Enable empty-directory removal
    pub fn remove_empty(mut self, enabled: bool) -> Self {
        self.remove_empty = enabled;
        self
    }

    /// Enable dry run mode
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Set the upper bound on empty-directory passes
    pub fn max_empty_passes(mut self, passes: usize) -> Self {
        self.max_empty_passes = Some(passes);
        self
    }

    /// Resolve relative roots against this directory instead of the
    /// process working directory
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Set the verbose level
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable or disable quiet mode
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Validate the configuration and build the [`Cleaner`]
    ///
    /// # Errors
    ///
    /// Returns [`CleanError::ConfigError`] when no root is given, when the
    /// pass bound is zero, or when two roots are equal or nested.
    pub fn build(self) -> Result<Cleaner> {
        if self.roots.is_empty() {
            return Err(CleanError::ConfigError(
                "at least one root directory is required".to_string(),
            ));
        }

        let max_empty_passes = self.max_empty_passes.unwrap_or(DEFAULT_MAX_EMPTY_PASSES);
        if max_empty_passes == 0 {
            return Err(CleanError::ConfigError(
                "max empty-directory passes must be at least 1".to_string(),
            ));
        }

        let base = match self.working_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|source| CleanError::IoError {
                path: PathBuf::from("."),
                source,
            })?,
        };

        let roots: Vec<PathBuf> = self
            .roots
            .iter()
            .map(|root| normalize_root(root, &base))
            .collect();

        for (i, a) in roots.iter().enumerate() {
            for b in &roots[i + 1..] {
                if a.starts_with(b) || b.starts_with(a) {
                    return Err(CleanError::ConfigError(format!(
                        "roots '{}' and '{}' overlap",
                        a.display(),
                        b.display()
                    )));
                }
            }
        }

        Ok(Cleaner {
            roots,
            find_duplicates: self.find_duplicates,
            remove_temp: self.remove_temp,
            remove_empty: self.remove_empty,
            dry_run: self.dry_run,
            max_empty_passes,
            verbose: self.verbose,
            quiet: self.quiet,
        })
    }
}

/// Normalize a root to be absolute and clean, without requiring it to exist.
///
/// This function:
/// - Expands a leading `~` to the user's home directory
/// - Joins relative paths onto `base`
/// - Removes `.` and `..` components lexically
/// - Does NOT resolve symlinks (preserves user intent)
pub fn normalize_root(path: impl AsRef<Path>, base: &Path) -> PathBuf {
    let path = path.as_ref();

    let expanded = match (path.strip_prefix("~"), home::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    };

    let absolute = if expanded.is_relative() {
        base.join(expanded)
    } else {
        expanded
    };

    let mut components = Vec::new();
    for component in absolute.components() {
        match component {
            Component::ParentDir => {
                if let Some(last) = components.last()
                    && !matches!(last, Component::ParentDir | Component::RootDir)
                {
                    components.pop();
                    continue;
                }
                if matches!(components.last(), Some(Component::RootDir)) {
                    continue;
                }
                components.push(component);
            }
            Component::CurDir => continue,
            _ => components.push(component),
        }
    }

    components.iter().collect()
}
