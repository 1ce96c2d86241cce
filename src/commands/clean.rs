//! Clean command and summary output.

use std::path::{Path, PathBuf};

use crate::clean::{Cleaner, Summary, format_size};
use crate::error::{CleanError, Result};
use crate::logging::Logger;

pub struct Clean<'a> {
    directories: &'a [PathBuf],
    dupes: bool,
    tmp: bool,
    empty: bool,
    dry_run: bool,
    max_passes: usize,
    verbose: u8,
    quiet: bool,
    working_dir: &'a Path,
}

pub struct CleanBuilder<'a> {
    directories: &'a [PathBuf],
    dupes: bool,
    tmp: bool,
    empty: bool,
    dry_run: bool,
    max_passes: usize,
    verbose: u8,
    quiet: bool,
    working_dir: Option<&'a Path>,
}

impl<'a> Default for CleanBuilder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CleanBuilder<'a> {
    pub fn new() -> Self {
        Self {
            directories: &[],
            dupes: false,
            tmp: false,
            empty: false,
            dry_run: false,
            max_passes: crate::clean::DEFAULT_MAX_EMPTY_PASSES,
            verbose: 0,
            quiet: false,
            working_dir: None,
        }
    }

    pub fn directories(mut self, directories: &'a [PathBuf]) -> Self {
        self.directories = directories;
        self
    }

    pub fn dupes(mut self, enabled: bool) -> Self {
        self.dupes = enabled;
        self
    }

    pub fn tmp(mut self, enabled: bool) -> Self {
        self.tmp = enabled;
        self
    }

    pub fn empty(mut self, enabled: bool) -> Self {
        self.empty = enabled;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn max_passes(mut self, passes: usize) -> Self {
        self.max_passes = passes;
        self
    }

    pub fn verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn working_dir(mut self, working_dir: &'a Path) -> Self {
        self.working_dir = Some(working_dir);
        self
    }

    pub fn build(self) -> Result<Clean<'a>> {
        Ok(Clean {
            directories: self.directories,
            dupes: self.dupes,
            tmp: self.tmp,
            empty: self.empty,
            dry_run: self.dry_run,
            max_passes: self.max_passes,
            verbose: self.verbose,
            quiet: self.quiet,
            working_dir: self
                .working_dir
                .ok_or_else(|| CleanError::ConfigError("working_dir is required".to_string()))?,
        })
    }
}

impl<'a> Clean<'a> {
    pub fn builder<'b>() -> CleanBuilder<'b> {
        CleanBuilder::new()
    }

    /// Execute the clean command and print its summary
    pub fn run(self) -> Result<Summary> {
        let log = Logger::new(self.verbose, self.quiet);

        if !self.dupes && !self.tmp && !self.empty {
            log.info("Nothing selected; pass --dupes, --tmp and/or --empty to clean something");
        }

        let cleaner = Cleaner::builder()
            .roots(self.directories)
            .find_duplicates(self.dupes)
            .remove_temp(self.tmp)
            .remove_empty(self.empty)
            .dry_run(self.dry_run)
            .max_empty_passes(self.max_passes)
            .working_dir(self.working_dir)
            .verbose(self.verbose)
            .quiet(self.quiet)
            .build()?;

        let summary = cleaner.run().summary();
        print_summary(&summary, self.dry_run, &log);

        Ok(summary)
    }
}

/// Print the end-of-run summary. Errors are printed even in quiet mode.
pub(crate) fn print_summary(summary: &Summary, dry_run: bool, log: &Logger) {
    let rule = "=".repeat(60);
    let title = if dry_run {
        "SMART CLEAN-UP SUMMARY (dry run)"
    } else {
        "SMART CLEAN-UP SUMMARY"
    };

    log.info("");
    log.info(&rule);
    log.info(title);
    log.info(&rule);
    log.info(format!(" Files deleted       : {}", summary.files_count));
    log.info(format!(" Directories deleted : {}", summary.dirs_count));
    log.info(format!(
        " Space reclaimed     : {}",
        format_size(summary.bytes_reclaimed)
    ));

    if !summary.skipped.is_empty() {
        log.info("");
        log.info("Skipped:");
        for line in &summary.skipped {
            log.info(format!("  - {line}"));
        }
    }

    if summary.errors.is_empty() {
        log.info("");
        log.info("No errors.");
    } else {
        log.warn("");
        log.warn("Errors:");
        for line in &summary.errors {
            log.warn(format!("  - {line}"));
        }
    }
    log.info(&rule);
}
