use std::path::PathBuf;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::clean::DEFAULT_MAX_EMPTY_PASSES;

#[test]
fn test_cli_parsing_defaults() {
    let cli = Cli::parse_from(["smart-clean", "clean"]);
    let Commands::Clean {
        directories,
        dupes,
        tmp,
        empty,
        dry_run,
        max_passes,
    } = cli.command();

    assert_eq!(directories, &[PathBuf::from(".")]);
    assert!(!dupes);
    assert!(!tmp);
    assert!(!empty);
    assert!(!dry_run);
    assert_eq!(*max_passes, DEFAULT_MAX_EMPTY_PASSES);
    assert_eq!(cli.global_opts().verbose(), 0);
    assert!(!cli.global_opts().quiet());
}

#[test]
fn test_clean_flags() {
    let cli = Cli::parse_from([
        "smart-clean",
        "clean",
        "photos",
        "downloads",
        "--dupes",
        "--tmp",
        "--empty",
        "--dry-run",
        "--max-passes",
        "5",
    ]);
    let Commands::Clean {
        directories,
        dupes,
        tmp,
        empty,
        dry_run,
        max_passes,
    } = cli.command();

    assert_eq!(
        directories,
        &[PathBuf::from("photos"), PathBuf::from("downloads")]
    );
    assert!(*dupes && *tmp && *empty && *dry_run);
    assert_eq!(*max_passes, 5);
}

#[test]
fn test_verbose_flag() {
    let cli = Cli::parse_from(["smart-clean", "-vv", "clean"]);
    assert_eq!(cli.global_opts().verbose(), 2);
}

#[test]
fn test_global_flag_positioning() {
    // Global flags can be placed anywhere
    let cli = Cli::parse_from(["smart-clean", "clean", "--quiet"]);
    assert!(cli.global_opts().quiet());
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    let result = Cli::try_parse_from(["smart-clean", "-v", "-q", "clean"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_builder() {
    let cli = Cli::builder()
        .verbose(2)
        .quiet(false)
        .command(Commands::Clean {
            directories: vec![PathBuf::from("a")],
            dupes: true,
            tmp: false,
            empty: false,
            dry_run: true,
            max_passes: 3,
        })
        .build()
        .expect("Failed to build CLI");

    assert_eq!(cli.global_opts().verbose(), 2);
    assert!(!cli.global_opts().quiet());
    assert!(matches!(cli.command(), Commands::Clean { dupes: true, .. }));

    assert!(Cli::builder().build().is_err());
}
