use crate::error::OrganizeError;
use std::path::{Component, Path, PathBuf};

/// Files strictly larger than this many megabytes are moved.
pub const DEFAULT_THRESHOLD_MB: u64 = 100;

/// Leading underscore keeps the folder at the top of a name-sorted listing.
pub const DEFAULT_TARGET_FOLDER: &str = "_LargeFilesToReview";

/// Candidate folder names probed under the home directory, in order.
pub const DOWNLOADS_CANDIDATES: [&str; 2] = ["Downloads", "downloads"];

const BYTES_PER_MB: u64 = 1_024 * 1_024;

#[derive(Debug, Clone)]
pub struct Settings {
    pub threshold_mb: u64,
    pub target_folder: String,
    pub home: PathBuf,
    pub dry_run: bool,
}

impl Settings {
    /// Builds settings, falling back to the host home directory when `home` is `None`.
    pub fn new(
        threshold_mb: u64,
        target_folder: &str,
        home: Option<PathBuf>,
        dry_run: bool,
    ) -> Result<Self, OrganizeError> {
        if threshold_mb == 0 {
            return Err(OrganizeError::InvalidConfig {
                message: "threshold must be at least 1 MB".to_string(),
            });
        }
        validate_folder_name(target_folder)?;

        let home = match home {
            Some(h) => h,
            None => dirs::home_dir().ok_or(OrganizeError::HomeNotFound)?,
        };

        Ok(Settings {
            threshold_mb,
            target_folder: target_folder.to_string(),
            home,
            dry_run,
        })
    }

    #[must_use]
    pub fn threshold_bytes(&self) -> u64 {
        self.threshold_mb.saturating_mul(BYTES_PER_MB)
    }
}

fn validate_folder_name(name: &str) -> Result<(), OrganizeError> {
    let invalid = |reason: &str| OrganizeError::InvalidConfig {
        message: format!("target folder '{name}' {reason}"),
    };

    if name.trim().is_empty() {
        return Err(invalid("is empty"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("must not contain path separators"));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid("must be a plain folder name")),
    }
}
