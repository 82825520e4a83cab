//! Environment inputs of a resolution run.
//!
//! The process environment is read in exactly one place,
//! [`LaunchInputs::from_env`]. Everything downstream works on the injected
//! value, so a run is a pure function of its [`LaunchInputs`] and the
//! filesystem.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Overrides the working directory (absolute, or relative to the current directory).
pub const WORKING_DIRECTORY_VAR: &str = "sjl.workingDirectory";

/// Overrides config file discovery (absolute, or relative to the working directory).
pub const CONFIG_FILE_VAR: &str = "sjl.configFile";

/// Runtime home used when the config file does not name one.
pub const JAVA_HOME_VAR: &str = "JAVA_HOME";

/// Inputs a resolution run depends on, besides the filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchInputs {
    /// Process current directory; base for a relative working directory override
    pub current_dir: PathBuf,
    /// Working directory override
    pub working_dir: Option<PathBuf>,
    /// Config file override
    pub config_file: Option<PathBuf>,
    /// Runtime home fallback
    pub java_home: Option<PathBuf>,
}

impl LaunchInputs {
    /// Inputs with no overrides.
    pub fn new(current_dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: current_dir.into(),
            working_dir: None,
            config_file: None,
            java_home: None,
        }
    }

    /// Capture the current directory and the launcher variables of this process.
    pub fn from_env() -> Result<Self> {
        let current_dir = std::env::current_dir()
            .map_err(|source| Error::CurrentDirectoryUnavailable { source })?;
        Ok(Self::from_lookup(current_dir, |name| std::env::var_os(name)))
    }

    /// Build inputs from an arbitrary variable lookup. Empty values count as unset.
    pub fn from_lookup<F>(current_dir: impl Into<PathBuf>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let var = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };
        Self {
            current_dir: current_dir.into(),
            working_dir: var(WORKING_DIRECTORY_VAR),
            config_file: var(CONFIG_FILE_VAR),
            java_home: var(JAVA_HOME_VAR),
        }
    }

    #[must_use]
    pub fn with_working_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_java_home(mut self, path: impl Into<PathBuf>) -> Self {
        self.java_home = Some(path.into());
        self
    }

    /// Working directory override if set, else the current directory.
    pub fn working_dir_or_current(&self) -> &Path {
        self.working_dir.as_deref().unwrap_or(&self.current_dir)
    }
}
