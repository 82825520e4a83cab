//! Format detection and the reader trait

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::ResolvedConfiguration;
use crate::readers::{PropertiesReader, YamlReader};

/// Supported configuration syntaxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// Flat `key=value` pairs
    Properties,
    /// Structured YAML document
    Yaml,
}

static PROPERTIES_READER: PropertiesReader = PropertiesReader;
static YAML_READER: YamlReader = YamlReader;

impl ConfigFormat {
    /// Every supported format.
    pub const ALL: [ConfigFormat; 2] = [Self::Properties, Self::Yaml];

    /// File name suffixes (including the dot) that select this format.
    pub fn suffixes(&self) -> &'static [&'static str] {
        match self {
            Self::Properties => &[".properties"],
            Self::Yaml => &[".yaml", ".yml"],
        }
    }

    /// Detect the format from a file name. Matching is case-sensitive.
    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.suffixes().iter().any(|s| name.ends_with(s)))
    }

    /// Detect the format of the file at `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(Self::from_file_name)
            .ok_or_else(|| Error::UnsupportedFormat {
                path: path.to_path_buf(),
            })
    }

    /// The reader implementing this format.
    pub fn reader(&self) -> &'static dyn ConfigReader {
        match self {
            Self::Properties => &PROPERTIES_READER,
            Self::Yaml => &YAML_READER,
        }
    }
}

impl std::fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Properties => write!(f, "properties"),
            Self::Yaml => write!(f, "YAML"),
        }
    }
}

/// Extracts a [`ResolvedConfiguration`] from the raw bytes of one file.
///
/// `path` is only used to label errors; implementations must not read it.
pub trait ConfigReader: Send + Sync {
    /// The format this reader understands.
    fn format(&self) -> ConfigFormat;

    /// Parse `source` into a configuration.
    fn read(&self, path: &Path, source: &[u8]) -> Result<ResolvedConfiguration>;
}
