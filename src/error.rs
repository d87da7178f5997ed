use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Filesystem-access failures. Any of these aborts the whole run.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("cannot access {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to list {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to write table to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to move finished table to {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IndexError {
    /// The path the failing operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            IndexError::Access { path, .. }
            | IndexError::NotADirectory { path }
            | IndexError::Walk { path, .. }
            | IndexError::Write { path, .. }
            | IndexError::Persist { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, IndexError>;
