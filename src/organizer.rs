use crate::config::Settings;
use crate::error::OrganizeError;
use crate::locator;
use crate::mover;
use crate::naming;
use crate::report;
use crate::scanner;
use crate::types::{
    Entry, EntryKind, FailureStage, ItemFailure, MoveResult, MovedFile, RunReport, ScanCounts,
};
use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Moves every top-level file in the downloads folder larger than the threshold
/// into the review folder.
///
/// Only a missing downloads folder or an unusable review folder stops the run.
/// Failures on individual entries are recorded in the report and skipped.
pub fn organize_large_files(settings: &Settings) -> Result<RunReport, OrganizeError> {
    let threshold_bytes = settings.threshold_bytes();

    let downloads = locator::locate_downloads_folder(&settings.home)?;
    report::print_located(&downloads);

    let (target, target_status) =
        locator::ensure_target_folder(&downloads, &settings.target_folder, settings.dry_run)?;
    report::print_target_status(&target, target_status);
    report::print_scan_start(settings.threshold_mb);

    let (entries, mut failures) = scanner::scan_entries(&downloads);
    for failure in &failures {
        report::print_failure(failure);
    }

    let mut run = Run {
        target: &target,
        threshold_bytes,
        dry_run: settings.dry_run,
        counts: ScanCounts::default(),
        result: MoveResult::default(),
        moved: Vec::new(),
        failures: Vec::new(),
        planned: HashSet::new(),
    };

    for entry in &entries {
        run.process(entry);
    }

    let Run {
        counts,
        result,
        moved,
        failures: item_failures,
        ..
    } = run;
    failures.extend(item_failures);

    Ok(RunReport {
        downloads,
        target,
        target_status,
        threshold_bytes,
        dry_run: settings.dry_run,
        counts,
        result,
        moved,
        failures,
    })
}

struct Run<'a> {
    target: &'a Path,
    threshold_bytes: u64,
    dry_run: bool,
    counts: ScanCounts,
    result: MoveResult,
    moved: Vec<MovedFile>,
    failures: Vec<ItemFailure>,
    planned: HashSet<PathBuf>,
}

impl Run<'_> {
    fn process(&mut self, entry: &Entry) {
        self.counts.scanned += 1;

        if entry.kind == EntryKind::Directory {
            log::debug!("Skipping directory {}", entry.name);
            self.counts.directories += 1;
            return;
        }

        // Symlinks are judged by what they point at.
        let meta = match entry.resolved_metadata() {
            Ok(m) => m,
            Err(e) => {
                self.fail(ItemFailure::from_io(&entry.name, FailureStage::Inspect, &e));
                return;
            }
        };
        if meta.is_dir() {
            log::debug!("Skipping link to directory {}", entry.name);
            self.counts.directories += 1;
            return;
        }

        let size = meta.len();
        if size <= self.threshold_bytes {
            log::debug!("Keeping {} ({size} bytes)", entry.name);
            self.counts.below_threshold += 1;
            return;
        }

        report::print_found(&entry.name, size);

        let file_name = entry.path.file_name().unwrap_or(OsStr::new(&entry.name));
        let destination =
            naming::unique_destination_excluding(self.target, file_name, &self.planned);

        if self.dry_run {
            self.planned.insert(destination.clone());
        } else if let Err(e) = mover::move_file(&entry.path, &destination) {
            self.fail(ItemFailure::from_io(&entry.name, FailureStage::Move, &e));
            return;
        }

        report::print_moved(&destination, self.dry_run);
        log::info!(
            "{} {} -> {}",
            if self.dry_run { "Would move" } else { "Moved" },
            entry.path.display(),
            destination.display()
        );
        self.result.record(size);
        self.moved.push(MovedFile {
            name: entry.name.clone(),
            size,
            destination,
        });
    }

    fn fail(&mut self, failure: ItemFailure) {
        log::warn!("Skipping {}: {}", failure.name, failure.message);
        report::print_failure(&failure);
        self.failures.push(failure);
    }
}
