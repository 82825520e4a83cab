//! Error types for sjl-config

use std::path::PathBuf;

use crate::ConfigFormat;

/// Result type for sjl-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported config format: {path} (expected .properties, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Malformed {format} config at {path}: {message}")]
    MalformedDocument {
        path: PathBuf,
        format: ConfigFormat,
        /// Key being read when the error occurred, when known
        key: Option<String>,
        message: String,
    },

    #[error("Invalid value for `{key}` in {path}: expected {expected}")]
    TypeMismatch {
        path: PathBuf,
        key: String,
        expected: &'static str,
    },

    #[error("Failed to read config: {0}")]
    Fs(#[from] sjl_fs::Error),
}

impl Error {
    pub fn malformed(
        path: impl Into<PathBuf>,
        format: ConfigFormat,
        key: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            format,
            key,
            message: message.into(),
        }
    }

    pub fn type_mismatch(
        path: impl Into<PathBuf>,
        key: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            key: key.into(),
            expected,
        }
    }

    /// The offending key, for errors that can name one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::MalformedDocument { key, .. } => key.as_deref(),
            Self::TypeMismatch { key, .. } => Some(key),
            Self::UnsupportedFormat { .. } | Self::Fs(_) => None,
        }
    }
}
