mod common;

use std::collections::HashSet;
use std::ffi::OsStr;

use common::{Flags, clean, snapshot, total_size, write_file};
use proptest::prelude::*;
use smart_clean::clean::classify::{is_temporary_directory, is_temporary_file};
use tempfile::TempDir;

const DIRS: &[&str] = &["", "p", "p/q", "p/q/r", "__pycache__", "s/.mypy_cache", "t"];
const NAMES: &[&str] = &["a.txt", "b.txt", "c.log", "d.TMP", "e.bin", "f.bak"];
const CONTENTS: &[&[u8]] = &[b"X", b"YY", b"ZZZ", b""];
const EMPTY_DIRS: &[&str] = &["e", "e/f/g", "p/q/r/empty", "t/u"];

#[derive(Clone, Debug)]
struct Tree {
    files: Vec<(usize, usize, usize)>,
    empty_dirs: Vec<usize>,
}

fn tree_strategy() -> impl Strategy<Value = Tree> {
    (
        prop::collection::vec((0..DIRS.len(), 0..NAMES.len(), 0..CONTENTS.len()), 0..14),
        prop::collection::vec(0..EMPTY_DIRS.len(), 0..3),
    )
        .prop_map(|(files, empty_dirs)| Tree { files, empty_dirs })
}

fn materialize(tree: &Tree) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for &(dir, name, content) in &tree.files {
        let rel = if DIRS[dir].is_empty() {
            NAMES[name].to_string()
        } else {
            format!("{}/{}", DIRS[dir], NAMES[name])
        };
        write_file(temp_dir.path(), &rel, CONTENTS[content]);
    }
    for &dir in &tree.empty_dirs {
        std::fs::create_dir_all(temp_dir.path().join(EMPTY_DIRS[dir])).unwrap();
    }
    temp_dir
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_dry_run_parity(tree in tree_strategy()) {
        let dry = materialize(&tree);
        let live = materialize(&tree);

        let before = snapshot(dry.path());
        let dry_summary = clean(&[dry.path()], Flags::all(true)).summary();
        let live_summary = clean(&[live.path()], Flags::all(false)).summary();

        prop_assert_eq!(snapshot(dry.path()), before);
        prop_assert_eq!(dry_summary.files_count, live_summary.files_count);
        prop_assert_eq!(dry_summary.dirs_count, live_summary.dirs_count);
        prop_assert_eq!(dry_summary.bytes_reclaimed, live_summary.bytes_reclaimed);
        prop_assert!(live_summary.errors.is_empty());
    }

    #[test]
    fn test_live_run_invariants(tree in tree_strategy()) {
        let live = materialize(&tree);
        let size_before = total_size(live.path());
        let before = snapshot(live.path());

        let summary = clean(&[live.path()], Flags::all(false)).summary();
        let after = snapshot(live.path());

        // Reclaimed bytes are exactly what disappeared from disk
        prop_assert_eq!(summary.bytes_reclaimed, size_before - total_size(live.path()));

        // No temporary item survives
        for rel in after.keys() {
            let name = rel.file_name().unwrap_or(OsStr::new(""));
            prop_assert!(!is_temporary_file(name) || after[rel].is_none());
            prop_assert!(!rel.iter().any(is_temporary_directory));
        }

        // Every non-temporary content survives exactly once
        let expected: HashSet<&Vec<u8>> = before
            .iter()
            .filter(|(rel, content)| {
                content.is_some()
                    && !is_temporary_file(rel.file_name().unwrap())
                    && !rel.iter().any(is_temporary_directory)
            })
            .filter_map(|(_, content)| content.as_ref())
            .collect();
        let remaining: Vec<&Vec<u8>> = after.values().flatten().collect();
        prop_assert_eq!(remaining.len(), expected.len());
        prop_assert_eq!(remaining.into_iter().collect::<HashSet<_>>(), expected);

        // A second run has nothing left to do
        let again = clean(&[live.path()], Flags::all(false)).summary();
        prop_assert_eq!(again.files_count, 0);
        prop_assert_eq!(again.dirs_count, 0);
        prop_assert_eq!(again.bytes_reclaimed, 0);
    }
}
