use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::report::{DeletionRecord, EntryKind, Outcome, Report};
use super::size::path_size;
use crate::error::CleanError;
use crate::logging::Logger;

/// How a path should be removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// Unlink a single file.
    File,
    /// Remove a directory and everything below it.
    Tree,
    /// Remove a directory that is expected to be empty. Fails, and is
    /// skipped, if it gained a child in the meantime.
    EmptyDir,
}

impl Removal {
    fn kind(self) -> EntryKind {
        match self {
            Removal::File => EntryKind::File,
            Removal::Tree | Removal::EmptyDir => EntryKind::Dir,
        }
    }
}

/// Performs, or simulates, single deletions.
///
/// Every path that is removed, really or in dry-run mode, is remembered so
/// later stages can treat it as gone. That is what lets a dry run collapse
/// the same parent directories a live run would.
#[derive(Debug)]
pub struct Executor {
    dry_run: bool,
    log: Logger,
    removed: HashSet<PathBuf>,
}

impl Executor {
    pub fn new(dry_run: bool, log: Logger) -> Self {
        Self {
            dry_run,
            log,
            removed: HashSet::new(),
        }
    }

    /// True if `path` was removed, or lies below a removed directory.
    pub fn is_removed(&self, path: &Path) -> bool {
        path.ancestors().any(|p| self.removed.contains(p))
    }

    /// Delete (or simulate deleting) `path`, log the outcome and fold it
    /// into `report` exactly once. Returns whether the path counts as gone.
    pub fn delete(&mut self, path: &Path, removal: Removal, report: &mut Report) -> bool {
        let record = self.execute(path, removal);
        match &record.outcome {
            Outcome::Removed { .. } => self.log.item(&record),
            Outcome::Skipped(reason) => self.log.verbose(1, format!("{record}: {reason}")),
            Outcome::Failed(error) => {
                self.log.warn(format!("{record}: {}", error.to_report_line()))
            }
        }

        let removed = record.removed();
        if removed {
            self.removed.insert(path.to_path_buf());
        }
        report.record(record);
        removed
    }

    fn execute(&self, path: &Path, removal: Removal) -> DeletionRecord {
        // Size first; a failed stat never blocks the deletion itself
        let bytes = match removal {
            Removal::EmptyDir => 0,
            Removal::File | Removal::Tree => path_size(path),
        };

        let outcome = if self.dry_run {
            Outcome::Removed { bytes }
        } else {
            let result = match removal {
                Removal::File => fs::remove_file(path),
                Removal::Tree => fs::remove_dir_all(path),
                Removal::EmptyDir => fs::remove_dir(path),
            };
            match result {
                Ok(()) => Outcome::Removed { bytes },
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    Outcome::Skipped(CleanError::Vanished(path.to_path_buf()))
                }
                Err(e)
                    if removal == Removal::EmptyDir
                        && e.kind() == ErrorKind::DirectoryNotEmpty =>
                {
                    Outcome::Skipped(CleanError::RaceSkipped(path.to_path_buf()))
                }
                Err(source) => Outcome::Failed(CleanError::DeletionFailed {
                    path: path.to_path_buf(),
                    source,
                }),
            }
        };

        DeletionRecord {
            kind: removal.kind(),
            path: path.to_path_buf(),
            dry_run: self.dry_run,
            outcome,
        }
    }
}
