//! Error types

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure while walking the directory tree. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("cannot read directory '{}'", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot access '{}'", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("'{}': Not a directory", .path.display())]
    NotADirectory { path: PathBuf },
}

impl WalkError {
    pub(crate) fn read_dir(path: &Path, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn metadata(path: &Path, source: io::Error) -> Self {
        Self::Metadata {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path the walk failed on.
    pub fn path(&self) -> &Path {
        match self {
            Self::ReadDir { path, .. }
            | Self::Metadata { path, .. }
            | Self::NotADirectory { path } => path,
        }
    }
}
