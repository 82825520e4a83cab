//! Error types for sjl-fs

use std::path::PathBuf;

/// Result type for sjl-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sjl-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The path the failed operation was applied to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } => path,
        }
    }

    /// Unwrap the underlying OS error.
    pub fn into_io(self) -> std::io::Error {
        match self {
            Self::Io { source, .. } => source,
        }
    }
}
