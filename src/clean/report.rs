use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

use crate::error::CleanError;

/// Kind of filesystem object a deletion applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

impl EntryKind {
    fn tag(self) -> &'static str {
        match self {
            EntryKind::File => "[FILE]",
            EntryKind::Dir => "[DIR]",
        }
    }
}

/// Result of a single deletion attempt.
#[derive(Debug)]
pub enum Outcome {
    /// Removed (or, in dry-run mode, would have been removed).
    Removed { bytes: u64 },
    /// Left in place because the filesystem changed underneath us.
    Skipped(CleanError),
    /// Removal failed.
    Failed(CleanError),
}

/// One deletion attempt, as produced by the executor and fed to the
/// [`Report`].
#[derive(Debug)]
pub struct DeletionRecord {
    pub kind: EntryKind,
    pub path: PathBuf,
    pub dry_run: bool,
    pub outcome: Outcome,
}

impl DeletionRecord {
    /// True when the item is gone, or would be gone in dry-run mode.
    pub fn removed(&self) -> bool {
        matches!(self.outcome, Outcome::Removed { .. })
    }

    /// Bytes reclaimed by this deletion; zero unless removed.
    pub fn bytes(&self) -> u64 {
        match self.outcome {
            Outcome::Removed { bytes } => bytes,
            _ => 0,
        }
    }
}

impl fmt::Display for DeletionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dry = if self.dry_run { "(dry) " } else { "" };
        let verb = match self.outcome {
            Outcome::Removed { .. } => "deleted",
            Outcome::Skipped(_) => "skipped",
            Outcome::Failed(_) => "failed",
        };
        write!(
            f,
            "{} {dry}{verb} -> {}",
            self.kind.tag(),
            self.path.display()
        )
    }
}

/// Accumulator for everything that happened during one run.
///
/// Created empty when the run starts, threaded by `&mut` through scanning,
/// duplicate resolution, collapsing and deletion, then read once at the end.
/// Nothing is ever removed from it.
#[derive(Debug, Default)]
pub struct Report {
    files_deleted: usize,
    dirs_deleted: usize,
    bytes_reclaimed: u64,
    errors: Vec<CleanError>,
    skipped: Vec<CleanError>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one deletion attempt into the totals.
    pub fn record(&mut self, record: DeletionRecord) {
        match record.outcome {
            Outcome::Removed { bytes } => {
                match record.kind {
                    EntryKind::File => self.files_deleted += 1,
                    EntryKind::Dir => self.dirs_deleted += 1,
                }
                self.bytes_reclaimed += bytes;
            }
            Outcome::Skipped(reason) => self.skipped.push(reason),
            Outcome::Failed(error) => self.errors.push(error),
        }
    }

    pub fn record_error(&mut self, error: CleanError) {
        self.errors.push(error);
    }

    pub fn record_skipped(&mut self, reason: CleanError) {
        self.skipped.push(reason);
    }

    pub fn errors(&self) -> &[CleanError] {
        &self.errors
    }

    pub fn skipped(&self) -> &[CleanError] {
        &self.skipped
    }

    /// Paths already reported as unreadable.
    pub(crate) fn unreadable_paths(&self) -> HashSet<PathBuf> {
        self.errors
            .iter()
            .filter_map(|error| match error {
                CleanError::Unreadable { path, .. } => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Process exit status for the surrounding CLI: 0 when no error was
    /// recorded, 1 otherwise. Skips never fail a run.
    pub fn exit_status(&self) -> u8 {
        u8::from(self.has_errors())
    }

    pub fn summary(&self) -> Summary {
        Summary {
            files_count: self.files_deleted,
            dirs_count: self.dirs_deleted,
            bytes_reclaimed: self.bytes_reclaimed,
            errors: self.errors.iter().map(CleanError::to_report_line).collect(),
            skipped: self.skipped.iter().map(CleanError::to_report_line).collect(),
        }
    }
}

/// Plain snapshot of a [`Report`] for presentation layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of files deleted
    pub files_count: usize,
    /// Number of directories deleted
    pub dirs_count: usize,
    /// Total bytes reclaimed
    pub bytes_reclaimed: u64,
    /// One line per recorded error
    pub errors: Vec<String>,
    /// One line per recorded skip
    pub skipped: Vec<String>,
}

impl Summary {
    pub fn exit_status(&self) -> u8 {
        u8::from(!self.errors.is_empty())
    }
}
