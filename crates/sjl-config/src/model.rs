//! The parsed, not yet validated configuration.

use serde::{Deserialize, Serialize};

use crate::keys::ConfigKey;

/// Launcher settings read from exactly one configuration file.
///
/// Paths are kept verbatim (possibly relative, possibly empty); defaulting
/// and validation happen during resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfiguration {
    /// Runtime home directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub java_home: Option<String>,

    /// Directory holding the launcher artifact
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lib_folder: Option<String>,

    /// Scratch directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_folder: Option<String>,

    /// Extra invocation arguments, in file order
    #[serde(default)]
    pub args: Vec<String>,
}

impl ResolvedConfiguration {
    /// Value of a single-valued key. `Args` always yields `None`.
    pub fn get(&self, key: ConfigKey) -> Option<&str> {
        match key {
            ConfigKey::JavaHome => self.java_home.as_deref(),
            ConfigKey::LibFolder => self.lib_folder.as_deref(),
            ConfigKey::TempFolder => self.temp_folder.as_deref(),
            ConfigKey::Args => None,
        }
    }

    /// Assign a recognized key. Single-valued keys are overwritten, `Args` appends.
    pub fn apply(&mut self, key: ConfigKey, value: String) {
        match key {
            ConfigKey::JavaHome => self.java_home = Some(value),
            ConfigKey::LibFolder => self.lib_folder = Some(value),
            ConfigKey::TempFolder => self.temp_folder = Some(value),
            ConfigKey::Args => self.args.push(value),
        }
    }

    /// Serialize the recognized keys as a properties document.
    ///
    /// Arguments are written as `sjl.args.<index>` so that reading the output
    /// back yields the same configuration.
    pub fn to_properties(&self) -> String {
        let mut out = String::new();
        for key in [ConfigKey::JavaHome, ConfigKey::LibFolder, ConfigKey::TempFolder] {
            if let Some(value) = self.get(key) {
                push_property(&mut out, key.property_prefix(), value);
            }
        }
        for (index, arg) in self.args.iter().enumerate() {
            let name = format!("{}.{index}", ConfigKey::Args.property_prefix());
            push_property(&mut out, &name, arg);
        }
        out
    }
}

fn push_property(out: &mut String, key: &str, value: &str) {
    out.push_str(key);
    out.push('=');
    out.push_str(&crate::readers::properties::escape_value(value));
    out.push('\n');
}
