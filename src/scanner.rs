use crate::types::{Entry, EntryKind, FailureStage, ItemFailure};
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Lists the direct children of `path`, sorted by file name. Does not recurse.
///
/// Entries that cannot be read are returned as failures instead of aborting.
#[must_use]
pub fn scan_entries(path: &Path) -> (Vec<Entry>, Vec<ItemFailure>) {
    let mut entries = Vec::new();
    let mut failures = Vec::new();

    for item in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        match item {
            Ok(e) => {
                let ft = e.file_type();
                let kind = if ft.is_symlink() {
                    EntryKind::Symlink
                } else if ft.is_dir() {
                    EntryKind::Directory
                } else if ft.is_file() {
                    EntryKind::File
                } else {
                    EntryKind::Other
                };
                entries.push(Entry {
                    name: e.file_name().to_string_lossy().to_string(),
                    path: e.into_path(),
                    kind,
                });
            }
            Err(err) => {
                let name = err
                    .path()
                    .and_then(Path::file_name)
                    .map_or_else(
                        || path.display().to_string(),
                        |n| n.to_string_lossy().to_string(),
                    );
                let io_err = io::Error::from(err);
                log::warn!("Cannot read directory entry {name}: {io_err}");
                failures.push(ItemFailure::from_io(&name, FailureStage::Inspect, &io_err));
            }
        }
    }

    log::debug!("Scanned {} entries in {}", entries.len(), path.display());
    (entries, failures)
}
