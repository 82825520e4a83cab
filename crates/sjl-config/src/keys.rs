//! The four logical fields a configuration file can set.

/// Name of the section (YAML) or key prefix (properties) owning launcher settings.
pub const SECTION: &str = "sjl";

/// A recognized launcher setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    JavaHome,
    LibFolder,
    TempFolder,
    Args,
}

impl ConfigKey {
    /// Keys in the order a properties key is tested against them.
    pub const ALL: [ConfigKey; 4] = [
        Self::JavaHome,
        Self::LibFolder,
        Self::TempFolder,
        Self::Args,
    ];

    /// Entry name inside the `sjl` section.
    pub fn name(&self) -> &'static str {
        match self {
            Self::JavaHome => "javaHome",
            Self::LibFolder => "libFolder",
            Self::TempFolder => "tempFolder",
            Self::Args => "args",
        }
    }

    /// Properties key prefix, e.g. `sjl.javaHome`.
    pub fn property_prefix(&self) -> &'static str {
        match self {
            Self::JavaHome => "sjl.javaHome",
            Self::LibFolder => "sjl.libFolder",
            Self::TempFolder => "sjl.tempFolder",
            Self::Args => "sjl.args",
        }
    }

    /// Dotted path used in error messages, e.g. `sjl.libFolder`.
    pub fn qualified(&self) -> String {
        format!("{SECTION}.{}", self.name())
    }

    /// First key whose prefix `property` starts with (case-sensitive).
    pub fn match_property(property: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| property.starts_with(key.property_prefix()))
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
