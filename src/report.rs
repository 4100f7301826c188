use crate::types::{
    FailureKind, FailureStage, ItemFailure, RunReport, TargetStatus, bytes_to_mb,
};
use chrono::Local;
use colored::Colorize;
use comfy_table::{Attribute, Cell, Color, Table};
use std::path::Path;

const RULE: &str = "==================================================";

pub fn print_header(dry_run: bool) {
    let mode = if dry_run { " (dry run)" } else { "" };
    println!(
        "{}",
        format!(
            "=== Large File Review{mode}: {} ===",
            Local::now().format("%Y-%m-%d %H:%M")
        )
        .cyan()
    );
}

pub fn print_located(downloads: &Path) {
    println!("Scanning Downloads folder: {}", downloads.display());
}

pub fn print_target_status(target: &Path, status: TargetStatus) {
    let name = display_name(target);
    match status {
        TargetStatus::Created => println!("Created target folder: {}", name.green()),
        TargetStatus::Existing => println!("Target folder exists: {name}"),
        TargetStatus::Planned => println!("Target folder would be created: {}", name.yellow()),
    }
}

pub fn print_scan_start(threshold_mb: u64) {
    println!("\nLooking for files larger than {threshold_mb} MB...");
    println!("{}", "-".repeat(RULE.len()));
}

pub fn print_found(name: &str, size: u64) {
    println!("Found: {name} ({:.2} MB)", bytes_to_mb(size));
}

pub fn print_moved(destination: &Path, dry_run: bool) {
    let verb = if dry_run { "Would move to" } else { "Moved to" };
    println!(" -> {verb}: {}", display_name(destination).green());
}

pub fn print_failure(failure: &ItemFailure) {
    let line = match (failure.kind, failure.stage) {
        (FailureKind::PermissionDenied, _) => {
            format!("Permission denied accessing: {}. Skipping.", failure.name)
        }
        (FailureKind::Other, FailureStage::Inspect) => {
            format!("Error reading {}: {}", failure.name, failure.message)
        }
        (FailureKind::Other, FailureStage::Move) => {
            format!("Error moving {}: {}", failure.name, failure.message)
        }
    };
    println!(" {} {}", "[!]".red(), line);
}

pub fn print_summary(report: &RunReport) {
    println!("\n{RULE}");
    let title = if report.dry_run { "SUMMARY (preview)" } else { "SUMMARY" };
    println!("{}", title.cyan());
    println!("{RULE}");

    if !report.moved.is_empty() {
        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
        table.set_header(vec!["File", "Size", "Destination"]);
        for m in &report.moved {
            table.add_row(vec![
                Cell::new(&m.name),
                Cell::new(human_bytes::human_bytes(m.size as f64)),
                Cell::new(display_name(&m.destination)),
            ]);
        }
        table.add_row(vec![
            Cell::new("TOTAL").add_attribute(Attribute::Bold),
            Cell::new(human_bytes::human_bytes(report.result.total_bytes as f64))
                .add_attribute(Attribute::Bold),
            Cell::new(""),
        ]);
        println!("{table}");
    }

    if !report.failures.is_empty() {
        let mut table = Table::new();
        table.load_preset(comfy_table::presets::UTF8_HORIZONTAL_ONLY);
        table.set_header(vec!["Skipped", "Stage", "Error"]);
        for f in &report.failures {
            let stage = match f.stage {
                FailureStage::Inspect => "inspect",
                FailureStage::Move => "move",
            };
            table.add_row(vec![
                Cell::new(&f.name),
                Cell::new(stage),
                Cell::new(&f.message).fg(Color::Red),
            ]);
        }
        println!("{table}");
    }

    print!("{}", summary_totals(report));
    println!("{RULE}");
}

/// Totals block closing a run: counts, MB moved and the folders involved.
#[must_use]
pub fn summary_totals(report: &RunReport) -> String {
    let verb = if report.dry_run { "Would move" } else { "Moved" };
    let mut out = format!(
        "Scanned {} entries: {} folders skipped, {} at or below {:.0} MB.\n",
        report.counts.scanned,
        report.counts.directories,
        report.counts.below_threshold,
        bytes_to_mb(report.threshold_bytes)
    );
    out.push_str(&format!("Completed. {verb} {} files.\n", report.result.count));
    out.push_str(&format!(
        "Total space ready for review: {:.2} MB\n",
        report.result.total_mb()
    ));
    if !report.failures.is_empty() {
        out.push_str(&format!(
            "WARNING: {} entries could not be processed.\n",
            report.failures.len()
        ));
    }
    out.push_str(&format!("Scanned folder: {}\n", report.downloads.display()));
    out.push_str(&format!("Check the folder: {}\n", report.target.display()));
    out
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MoveResult, ScanCounts};
    use std::path::PathBuf;

    fn sample_report(dry_run: bool) -> RunReport {
        let mut result = MoveResult::default();
        result.record(150 * 1_024 * 1_024);
        result.record(1_024 * 1_024 / 2);
        RunReport {
            downloads: PathBuf::from("/home/u/Downloads"),
            target: PathBuf::from("/home/u/Downloads/_LargeFilesToReview"),
            target_status: TargetStatus::Existing,
            threshold_bytes: 100 * 1_024 * 1_024,
            dry_run,
            counts: ScanCounts {
                scanned: 5,
                directories: 1,
                below_threshold: 2,
            },
            result,
            moved: Vec::new(),
            failures: vec![ItemFailure {
                name: "locked.iso".to_string(),
                stage: FailureStage::Move,
                kind: FailureKind::PermissionDenied,
                message: "Permission denied".to_string(),
            }],
        }
    }

    #[test]
    fn test_summary_totals() {
        let text = summary_totals(&sample_report(false));
        assert!(text.contains("Scanned 5 entries: 1 folders skipped, 2 at or below 100 MB."));
        assert!(text.contains("Completed. Moved 2 files."));
        assert!(text.contains("Total space ready for review: 150.50 MB"));
        assert!(text.contains("WARNING: 1 entries could not be processed."));
        assert!(text.contains("Check the folder: /home/u/Downloads/_LargeFilesToReview"));
    }

    #[test]
    fn test_summary_totals_dry_run_wording() {
        let mut report = sample_report(true);
        report.failures.clear();
        let text = summary_totals(&report);
        assert!(text.contains("Completed. Would move 2 files."));
        assert!(!text.contains("WARNING"));
    }

    #[test]
    fn test_display_name_uses_last_component() {
        assert_eq!(display_name(Path::new("/a/b/video_1.mp4")), "video_1.mp4");
        assert_eq!(display_name(&PathBuf::from("/")), "/");
    }
}
