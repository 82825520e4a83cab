//! Constants and enums for launcher filesystem paths.

use std::path::{Path, PathBuf};

/// Name of the PID file placed inside the temp folder.
pub const PID_FILE_NAME: &str = "sjl.pid";

/// Relative locations probed, in order, when no config file is given explicitly.
///
/// The order is fixed: the first candidate that exists as a file wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigCandidate {
    /// `config.yml`
    ConfigYml,
    /// `config.yaml`
    ConfigYaml,
    /// `application.yaml`
    ApplicationYaml,
    /// `application.yml`
    ApplicationYml,
    /// `config/config.yaml`
    NestedConfigYaml,
    /// `config/config.yml`
    NestedConfigYml,
    /// `config/application.yaml`
    NestedApplicationYaml,
    /// `config/application.yml`
    NestedApplicationYml,
    /// `config.properties`
    ConfigProperties,
    /// `config/config.properties`
    NestedConfigProperties,
}

impl ConfigCandidate {
    /// All candidates in probe order.
    pub const ALL: [ConfigCandidate; 10] = [
        Self::ConfigYml,
        Self::ConfigYaml,
        Self::ApplicationYaml,
        Self::ApplicationYml,
        Self::NestedConfigYaml,
        Self::NestedConfigYml,
        Self::NestedApplicationYaml,
        Self::NestedApplicationYml,
        Self::ConfigProperties,
        Self::NestedConfigProperties,
    ];

    /// Path segments relative to the working directory.
    pub fn segments(&self) -> &'static [&'static str] {
        match self {
            Self::ConfigYml => &["config.yml"],
            Self::ConfigYaml => &["config.yaml"],
            Self::ApplicationYaml => &["application.yaml"],
            Self::ApplicationYml => &["application.yml"],
            Self::NestedConfigYaml => &["config", "config.yaml"],
            Self::NestedConfigYml => &["config", "config.yml"],
            Self::NestedApplicationYaml => &["config", "application.yaml"],
            Self::NestedApplicationYml => &["config", "application.yml"],
            Self::ConfigProperties => &["config.properties"],
            Self::NestedConfigProperties => &["config", "config.properties"],
        }
    }

    /// Forward-slash form, used for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigYml => "config.yml",
            Self::ConfigYaml => "config.yaml",
            Self::ApplicationYaml => "application.yaml",
            Self::ApplicationYml => "application.yml",
            Self::NestedConfigYaml => "config/config.yaml",
            Self::NestedConfigYml => "config/config.yml",
            Self::NestedApplicationYaml => "config/application.yaml",
            Self::NestedApplicationYml => "config/application.yml",
            Self::ConfigProperties => "config.properties",
            Self::NestedConfigProperties => "config/config.properties",
        }
    }

    /// Native path relative to the working directory.
    pub fn relative_path(&self) -> PathBuf {
        self.segments().iter().collect()
    }

    /// Native path of this candidate under `working_dir`.
    pub fn under(&self, working_dir: &Path) -> PathBuf {
        working_dir.join(self.relative_path())
    }
}

impl std::fmt::Display for ConfigCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Folders used when the configuration does not name one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultFolder {
    /// `lib`: holds the launcher artifact
    Lib,
    /// `temp`: scratch directory, created on demand
    Temp,
    /// `jre`: bundled runtime home
    RuntimeHome,
}

impl DefaultFolder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lib => "lib",
            Self::Temp => "temp",
            Self::RuntimeHome => "jre",
        }
    }
}

impl std::fmt::Display for DefaultFolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
