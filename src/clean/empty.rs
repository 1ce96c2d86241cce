use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::delete::{Executor, Removal};
use super::report::Report;
use crate::error::CleanError;
use crate::logging::Logger;

/// Remove directories that have no children left, bottom-up, over at most
/// `max_passes` passes.
///
/// Each pass visits the remaining directories deepest first and re-reads
/// each one from disk right before deciding. A child counts as present
/// unless the executor already removed it, which makes dry runs behave like
/// live ones. Passes stop early once a pass removes nothing.
///
/// Every directory is attempted at most once: a directory that is skipped
/// (it gained a child) or fails to delete is not retried in later passes.
/// Directories already reported as unreadable are left alone.
///
/// # Returns
///
/// The directories that were removed (or would be, in dry-run mode), in
/// removal order.
pub fn collapse(
    directories: Vec<PathBuf>,
    max_passes: usize,
    executor: &mut Executor,
    report: &mut Report,
    log: &Logger,
) -> Vec<PathBuf> {
    let unreadable = report.unreadable_paths();
    let mut remaining: Vec<PathBuf> = directories
        .into_iter()
        .filter(|dir| !executor.is_removed(dir) && !unreadable.contains(dir))
        .collect();
    remaining.sort_by(|a, b| depth(b).cmp(&depth(a)).then_with(|| a.cmp(b)));
    remaining.dedup();

    let mut removed = Vec::new();

    for pass in 1..=max_passes {
        let mut next = Vec::with_capacity(remaining.len());
        let before = removed.len();

        for dir in remaining {
            match is_empty(&dir, executor) {
                Ok(true) => {
                    if executor.delete(&dir, Removal::EmptyDir, report) {
                        removed.push(dir);
                    }
                }
                Ok(false) => next.push(dir),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(source) => report.record_error(CleanError::Unreadable { path: dir, source }),
            }
        }

        let removed_this_pass = removed.len() - before;
        log.verbose(
            2,
            format!("  Empty-directory pass {pass}: removed {removed_this_pass}"),
        );

        remaining = next;
        if removed_this_pass == 0 || remaining.is_empty() {
            break;
        }
    }

    removed
}

/// True when every child of `dir` is already removed.
fn is_empty(dir: &Path, executor: &Executor) -> io::Result<bool> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !executor.is_removed(&entry.path()) {
            return Ok(false);
        }
    }
    Ok(true)
}

fn depth(path: &Path) -> usize {
    path.components().count()
}
