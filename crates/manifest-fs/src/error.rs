//! Error types for manifest-fs

use std::path::{Path, PathBuf};

/// Result type for manifest-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in manifest-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A walk failure that carries no underlying I/O error (e.g. a link loop).
    #[error("Failed to walk {path}: {message}")]
    Walk { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Convert a `walkdir` failure, attributing it to `root` when the entry
    /// path is unknown.
    pub(crate) fn from_walk(root: &Path, err: walkdir::Error) -> Self {
        let path = err.path().unwrap_or(root).to_path_buf();
        let message = err.to_string();
        match err.into_io_error() {
            Some(source) => Self::Io { path, source },
            None => Self::Walk { path, message },
        }
    }

    /// The path the failure is attributed to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Walk { path, .. } => path,
        }
    }
}
