//! Classification of temporary files and directories by name.
//!
//! All checks look at the final path component only and compare
//! case-insensitively against a fixed rule set.

use std::ffi::OsStr;
use std::path::Path;

/// File extensions that mark a file as temporary (lowercase, without dot).
pub const TEMP_EXTENSIONS: &[&str] = &[
    "tmp", "temp", "bak", "old", "swp", "swo", "~", "log", "pyc", "pyo",
];

/// Exact file names that mark a file as temporary (lowercase).
pub const TEMP_FILENAMES: &[&str] = &[".ds_store", "thumbs.db"];

/// Directory names whose whole subtree is treated as temporary (lowercase).
pub const TEMP_DIRNAMES: &[&str] = &["__pycache__", ".pytest_cache", ".mypy_cache", ".ruff_cache"];

/// Returns true when a file name matches a temporary extension or basename.
pub fn is_temporary_file(name: &OsStr) -> bool {
    // Lossy so that non-UTF-8 stems still match on their extension
    let lower = name.to_string_lossy().to_lowercase();

    if TEMP_FILENAMES.contains(&lower.as_str()) {
        return true;
    }

    Path::new(&lower)
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| TEMP_EXTENSIONS.contains(&ext))
}

/// Returns true when a directory name matches a temporary directory rule.
pub fn is_temporary_directory(name: &OsStr) -> bool {
    let lower = name.to_string_lossy().to_lowercase();
    TEMP_DIRNAMES.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn file(name: &str) -> bool {
        is_temporary_file(OsStr::new(name))
    }

    fn dir(name: &str) -> bool {
        is_temporary_directory(OsStr::new(name))
    }

    #[test]
    fn test_temporary_extensions() {
        for name in [
            "a.tmp", "a.temp", "a.bak", "a.old", ".a.swp", "a.swo", "a.~", "c.log", "m.pyc",
            "m.pyo",
        ] {
            assert!(file(name), "{name} should be temporary");
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_non_utf8_names_classified_by_extension() {
        use std::os::unix::ffi::OsStrExt;

        assert!(is_temporary_file(OsStr::from_bytes(b"caf\xe9.LOG")));
        assert!(is_temporary_file(OsStr::from_bytes(b"\xff\xfe.tmp")));
        assert!(!is_temporary_file(OsStr::from_bytes(b"caf\xe9.txt")));
        assert!(!is_temporary_directory(OsStr::from_bytes(b"__pycache__\xe9")));
    }

    #[test]
    fn test_regular_files_not_temporary() {
        for name in [
            "a.txt",
            "main.rs",
            "log",
            "logfile",
            ".log",
            "a.log.txt",
            "backup",
            "notes.txt~",
        ] {
            assert!(!file(name), "{name} should not be temporary");
        }
    }

    #[test]
    fn test_exact_basenames() {
        assert!(file(".DS_Store"));
        assert!(file("thumbs.db"));
        assert!(!file("other.db"));
    }

    #[test]
    fn test_last_extension_only() {
        assert!(file("archive.tar.log"));
        assert!(!file("archive.log.gz"));
    }

    #[test]
    fn test_temporary_directories() {
        assert!(dir("__pycache__"));
        assert!(dir(".pytest_cache"));
        assert!(dir(".MYPY_CACHE"));
        assert!(dir(".ruff_cache"));
        assert!(!dir("cache"));
        assert!(!dir("src"));
        assert!(!dir("__pycache__old"));
    }

    #[test]
    fn test_directory_rules_do_not_apply_to_files() {
        assert!(!file("__pycache__"));
        assert!(!dir("a.tmp"));
    }

    proptest! {
        #[test]
        fn test_extension_match_ignores_case(
            stem in "[a-zA-Z0-9_-]{1,12}",
            ext_idx in 0..TEMP_EXTENSIONS.len(),
            upper in any::<bool>(),
        ) {
            let ext = TEMP_EXTENSIONS[ext_idx];
            let ext = if upper { ext.to_uppercase() } else { ext.to_string() };
            let name = format!("{stem}.{ext}");
            prop_assert!(file(&name));
        }

        #[test]
        fn test_directory_match_ignores_case(
            dir_idx in 0..TEMP_DIRNAMES.len(),
            mask in prop::collection::vec(any::<bool>(), 16),
        ) {
            let name: String = TEMP_DIRNAMES[dir_idx]
                .chars()
                .zip(mask.iter().cycle())
                .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
                .collect();
            prop_assert!(dir(&name));
        }
    }
}
