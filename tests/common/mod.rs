#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use smart_clean::clean::{Cleaner, Report};
use walkdir::WalkDir;

/// What a run should do.
#[derive(Clone, Copy, Debug, Default)]
pub struct Flags {
    pub dupes: bool,
    pub tmp: bool,
    pub empty: bool,
    pub dry_run: bool,
}

impl Flags {
    pub fn all(dry_run: bool) -> Self {
        Self {
            dupes: true,
            tmp: true,
            empty: true,
            dry_run,
        }
    }
}

/// Run a quiet clean over `roots`.
pub fn clean(roots: &[&Path], flags: Flags) -> Report {
    Cleaner::builder()
        .roots(roots.iter().copied())
        .find_duplicates(flags.dupes)
        .remove_temp(flags.tmp)
        .remove_empty(flags.empty)
        .dry_run(flags.dry_run)
        .quiet(true)
        .build()
        .expect("valid configuration")
        .run()
}

/// Write `content` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Every entry below `root`, keyed by relative path. Directories map to
/// `None`, files to their contents.
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Option<Vec<u8>>> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_path_buf();
            let content = if e.file_type().is_dir() {
                None
            } else {
                Some(fs::read(e.path()).unwrap())
            };
            (rel, content)
        })
        .collect()
}

/// Sum of all file sizes below `root`.
pub fn total_size(root: &Path) -> u64 {
    snapshot(root)
        .values()
        .flatten()
        .map(|content| content.len() as u64)
        .sum()
}
