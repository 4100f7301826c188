use crate::config::DOWNLOADS_CANDIDATES;
use crate::error::OrganizeError;
use crate::types::TargetStatus;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Returns the first candidate under `home` that exists and is a directory.
pub fn locate_downloads_folder(home: &Path) -> Result<PathBuf, OrganizeError> {
    let searched: Vec<PathBuf> = DOWNLOADS_CANDIDATES
        .iter()
        .map(|name| home.join(name))
        .collect();

    for candidate in &searched {
        if candidate.is_dir() {
            log::debug!("Downloads folder found at {}", candidate.display());
            return Ok(candidate.clone());
        }
        log::debug!("No Downloads folder at {}", candidate.display());
    }

    Err(OrganizeError::DownloadsNotFound {
        home: home.to_path_buf(),
        searched,
    })
}

/// Creates `downloads/name` unless it already exists. Never creates in a dry run.
pub fn ensure_target_folder(
    downloads: &Path,
    name: &str,
    dry_run: bool,
) -> Result<(PathBuf, TargetStatus), OrganizeError> {
    let target = downloads.join(name);
    let fail = |source: io::Error| OrganizeError::TargetFolder {
        path: target.clone(),
        source,
    };

    match fs::metadata(&target) {
        Ok(meta) if meta.is_dir() => return Ok((target, TargetStatus::Existing)),
        Ok(_) => {
            return Err(fail(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "a non-directory entry already uses this name",
            )));
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(fail(e)),
    }

    if dry_run {
        return Ok((target, TargetStatus::Planned));
    }

    // Parent is the located downloads folder, so a single level is enough.
    match fs::create_dir(&target) {
        Ok(()) => {
            log::info!("Created review folder {}", target.display());
            Ok((target, TargetStatus::Created))
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && target.is_dir() => {
            Ok((target, TargetStatus::Existing))
        }
        Err(e) => Err(fail(e)),
    }
}
