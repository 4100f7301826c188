use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

/// A direct child of the downloads folder, as seen by one scan.
#[derive(Debug, Clone)]
pub struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

impl Entry {
    /// Metadata following symlinks, read only when the entry is evaluated.
    pub fn resolved_metadata(&self) -> io::Result<fs::Metadata> {
        fs::metadata(&self.path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    Created,
    Existing,
    /// Dry run: the folder is missing and would be created.
    Planned,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub count: usize,
    pub total_bytes: u64,
}

impl MoveResult {
    pub fn record(&mut self, size: u64) {
        self.count += 1;
        self.total_bytes = self.total_bytes.saturating_add(size);
    }

    #[must_use]
    pub fn total_mb(&self) -> f64 {
        bytes_to_mb(self.total_bytes)
    }
}

#[derive(Debug, Clone)]
pub struct MovedFile {
    pub name: String,
    pub size: u64,
    pub destination: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureStage {
    Inspect,
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    PermissionDenied,
    Other,
}

#[derive(Debug, Clone)]
pub struct ItemFailure {
    pub name: String,
    pub stage: FailureStage,
    pub kind: FailureKind,
    pub message: String,
}

impl ItemFailure {
    #[must_use]
    pub fn from_io(name: &str, stage: FailureStage, err: &io::Error) -> Self {
        let kind = if err.kind() == io::ErrorKind::PermissionDenied {
            FailureKind::PermissionDenied
        } else {
            FailureKind::Other
        };
        ItemFailure {
            name: name.to_string(),
            stage,
            kind,
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanCounts {
    pub scanned: usize,
    pub directories: usize,
    pub below_threshold: usize,
}

#[derive(Debug)]
pub struct RunReport {
    pub downloads: PathBuf,
    pub target: PathBuf,
    pub target_status: TargetStatus,
    pub threshold_bytes: u64,
    pub dry_run: bool,
    pub counts: ScanCounts,
    pub result: MoveResult,
    pub moved: Vec<MovedFile>,
    pub failures: Vec<ItemFailure>,
}

#[must_use]
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / 1_024.0 / 1_024.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_result_accumulates() {
        let mut result = MoveResult::default();
        result.record(1_024 * 1_024);
        result.record(3 * 1_024 * 1_024);
        assert_eq!(result.count, 2);
        assert_eq!(result.total_bytes, 4 * 1_024 * 1_024);
        assert!((result.total_mb() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_failure_classification() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        let f = ItemFailure::from_io("a.iso", FailureStage::Inspect, &denied);
        assert_eq!(f.kind, FailureKind::PermissionDenied);

        let gone = io::Error::from(io::ErrorKind::NotFound);
        let f = ItemFailure::from_io("b.iso", FailureStage::Move, &gone);
        assert_eq!(f.kind, FailureKind::Other);
        assert_eq!(f.stage, FailureStage::Move);
        assert_eq!(f.name, "b.iso");
    }
}
