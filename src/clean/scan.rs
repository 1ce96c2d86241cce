use std::collections::HashSet;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use blake3::Hash;
use rayon::prelude::*;
use walkdir::WalkDir;

use super::classify::{is_temporary_directory, is_temporary_file};
use super::delete::Removal;
use super::report::Report;
use crate::error::CleanError;
use crate::hashing::hash_file;
use crate::logging::Logger;

/// Which kinds of candidates a walk should collect.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    pub find_duplicates: bool,
    pub remove_temp: bool,
    pub remove_empty: bool,
}

/// A file or directory classified as temporary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TempCandidate {
    pub path: PathBuf,
    pub removal: Removal,
}

/// Everything a single root's walk produced.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Temporary files and directories, in walk order.
    pub temp_candidates: Vec<TempCandidate>,
    /// Digests of every hashed file, in walk order.
    pub hashed_files: Vec<(PathBuf, Hash)>,
    /// Directories seen below the root, excluding temporary ones. Only
    /// filled when empty-directory removal is enabled.
    pub directories: Vec<PathBuf>,
}

/// Walk `root` once, classifying and hashing what it contains.
///
/// Entries are visited depth-first in file-name order. A temporary
/// directory is recorded as one candidate and never descended into, so none
/// of its files are hashed. The root itself is never classified. Symbolic
/// links, special files and paths that vanish mid-walk are ignored; other
/// read failures land in `report` as [`CleanError::Unreadable`].
pub fn walk(root: &Path, options: ScanOptions, report: &mut Report, log: &Logger) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    let mut to_hash = Vec::new();
    let mut unreadable = HashSet::new();

    let mut walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    while let Some(next) = walker.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(err) => {
                if let Some(path) = record_walk_error(root, err, report) {
                    unreadable.insert(path);
                }
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }

        let file_type = entry.file_type();
        if file_type.is_symlink() {
            continue;
        }

        if file_type.is_dir() {
            if options.remove_temp && is_temporary_directory(entry.file_name()) {
                outcome.temp_candidates.push(TempCandidate {
                    path: entry.into_path(),
                    removal: Removal::Tree,
                });
                walker.skip_current_dir();
                continue;
            }
            if options.remove_empty {
                outcome.directories.push(entry.into_path());
            }
            continue;
        }

        if !file_type.is_file() {
            continue;
        }

        if options.remove_temp && is_temporary_file(entry.file_name()) {
            outcome.temp_candidates.push(TempCandidate {
                path: entry.into_path(),
                removal: Removal::File,
            });
        } else if options.find_duplicates {
            to_hash.push(entry.into_path());
        }
    }

    // A directory whose listing failed is already reported; collapsing it
    // would only read it again
    if !unreadable.is_empty() {
        outcome.directories.retain(|dir| !unreadable.contains(dir));
    }

    if !to_hash.is_empty() {
        log.verbose(
            1,
            format!("  Hashing {} files under {}", to_hash.len(), root.display()),
        );
        outcome.hashed_files = hash_in_order(to_hash, report, log);
    }

    outcome
}

/// Hash files on the rayon pool. Results come back in input order, so
/// first-seen order never depends on which hash finished first.
pub(super) fn hash_in_order(
    files: Vec<PathBuf>,
    report: &mut Report,
    log: &Logger,
) -> Vec<(PathBuf, Hash)> {
    let results: Vec<_> = files
        .into_par_iter()
        .map(|path| {
            let digest = hash_file(&path);
            (path, digest)
        })
        .collect();

    let mut hashed = Vec::with_capacity(results.len());
    for (path, digest) in results {
        match digest {
            Ok(digest) => {
                log.verbose(2, format!("    {} {}", digest.to_hex(), path.display()));
                hashed.push((path, digest));
            }
            Err(CleanError::Unreadable { source, .. }) if source.kind() == ErrorKind::NotFound => {}
            Err(CleanError::InvalidFileType { .. }) => {}
            Err(err) => report.record_error(err),
        }
    }
    hashed
}

/// Record a walk failure, returning the path it was recorded against.
fn record_walk_error(root: &Path, err: walkdir::Error, report: &mut Report) -> Option<PathBuf> {
    if err
        .io_error()
        .is_some_and(|e| e.kind() == ErrorKind::NotFound)
    {
        return None;
    }

    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| root.to_path_buf());
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    report.record_error(CleanError::Unreadable {
        path: path.clone(),
        source,
    });
    Some(path)
}
