use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Conditions that end a run before any entry is processed.
#[derive(Debug, Error)]
pub enum OrganizeError {
    #[error("could not determine the home directory")]
    HomeNotFound,

    #[error("could not locate a Downloads folder under {}", home.display())]
    DownloadsNotFound {
        home: PathBuf,
        searched: Vec<PathBuf>,
    },

    #[error("review folder {} is unusable: {source}", path.display())]
    TargetFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl OrganizeError {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfig { .. } => 2,
            _ => 1,
        }
    }
}
