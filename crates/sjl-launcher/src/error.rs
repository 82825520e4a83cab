//! Error types for sjl-launcher

use std::path::{Path, PathBuf};

use sjl_fs::ConfigCandidate;

/// Result type for launch resolution
pub type Result<T> = std::result::Result<T, Error>;

/// Terminal failures of a resolution run
///
/// Every error ends the run; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot determine the current directory: {source}")]
    CurrentDirectoryUnavailable {
        #[source]
        source: std::io::Error,
    },

    #[error("Working directory {path} does not exist")]
    WorkingDirectoryNotFound { path: PathBuf },

    /// `searched` is empty when an explicit config file was given.
    #[error("{}", config_not_found(.path, .searched))]
    ConfigFileNotFound {
        path: PathBuf,
        searched: Vec<ConfigCandidate>,
    },

    #[error("Lib folder {path} does not exist")]
    LibFolderNotFound { path: PathBuf },

    #[error("Failed to create temp folder {path}: {source}")]
    TempFolderCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No launcher artifact (sjl*.jar) found in {path}")]
    LauncherArtifactNotFound { path: PathBuf },

    #[error("Runtime home {path} does not exist")]
    RuntimeHomeNotFound { path: PathBuf },

    #[error(transparent)]
    Config(#[from] sjl_config::Error),

    #[error(transparent)]
    Fs(#[from] sjl_fs::Error),
}

fn config_not_found(path: &Path, searched: &[ConfigCandidate]) -> String {
    if searched.is_empty() {
        return format!("Config file {} does not exist", path.display());
    }
    let names: Vec<&str> = searched.iter().map(ConfigCandidate::as_str).collect();
    format!(
        "Unable to locate a config file in {} (searched: {})",
        path.display(),
        names.join(", ")
    )
}

/// Payload-free classification of [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    CurrentDirectoryUnavailable,
    WorkingDirectoryNotFound,
    ConfigFileNotFound,
    LibFolderNotFound,
    TempFolderCreationFailed,
    LauncherArtifactNotFound,
    RuntimeHomeNotFound,
    UnsupportedFormat,
    MalformedDocument,
    TypeMismatch,
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CurrentDirectoryUnavailable { .. } => ErrorKind::CurrentDirectoryUnavailable,
            Self::WorkingDirectoryNotFound { .. } => ErrorKind::WorkingDirectoryNotFound,
            Self::ConfigFileNotFound { .. } => ErrorKind::ConfigFileNotFound,
            Self::LibFolderNotFound { .. } => ErrorKind::LibFolderNotFound,
            Self::TempFolderCreationFailed { .. } => ErrorKind::TempFolderCreationFailed,
            Self::LauncherArtifactNotFound { .. } => ErrorKind::LauncherArtifactNotFound,
            Self::RuntimeHomeNotFound { .. } => ErrorKind::RuntimeHomeNotFound,
            Self::Config(sjl_config::Error::UnsupportedFormat { .. }) => ErrorKind::UnsupportedFormat,
            Self::Config(sjl_config::Error::MalformedDocument { .. }) => ErrorKind::MalformedDocument,
            Self::Config(sjl_config::Error::TypeMismatch { .. }) => ErrorKind::TypeMismatch,
            Self::Config(sjl_config::Error::Fs(_)) | Self::Fs(_) => ErrorKind::Io,
        }
    }

    /// The filesystem path the failing step was looking at, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::CurrentDirectoryUnavailable { .. } => None,
            Self::WorkingDirectoryNotFound { path }
            | Self::ConfigFileNotFound { path, .. }
            | Self::LibFolderNotFound { path }
            | Self::TempFolderCreationFailed { path, .. }
            | Self::LauncherArtifactNotFound { path }
            | Self::RuntimeHomeNotFound { path } => Some(path.as_path()),
            Self::Config(sjl_config::Error::UnsupportedFormat { path })
            | Self::Config(sjl_config::Error::MalformedDocument { path, .. })
            | Self::Config(sjl_config::Error::TypeMismatch { path, .. }) => Some(path.as_path()),
            Self::Config(sjl_config::Error::Fs(e)) | Self::Fs(e) => Some(e.path()),
        }
    }
}
