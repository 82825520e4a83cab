//! YAML reader using serde_yaml

use serde_yaml::{Mapping, Value};
use std::path::Path;

use crate::error::{Error, Result};
use crate::format::{ConfigFormat, ConfigReader};
use crate::keys::{ConfigKey, SECTION};
use crate::model::ResolvedConfiguration;

/// Reader for `.yaml` / `.yml` files
///
/// Only the top-level `sjl` mapping is inspected; every other key belongs to
/// the application and is ignored. Merge keys are applied first, so the
/// section may pull entries in from an anchor.
#[derive(Debug, Default)]
pub struct YamlReader;

impl ConfigReader for YamlReader {
    fn format(&self) -> ConfigFormat {
        ConfigFormat::Yaml
    }

    fn read(&self, path: &Path, source: &[u8]) -> Result<ResolvedConfiguration> {
        let text = std::str::from_utf8(source).map_err(|e| {
            Error::malformed(path, ConfigFormat::Yaml, None, format!("invalid UTF-8: {e}"))
        })?;
        if text.trim().is_empty() {
            return Ok(ResolvedConfiguration::default());
        }

        let mut document: Value = serde_yaml::from_str(text)
            .map_err(|e| Error::malformed(path, ConfigFormat::Yaml, None, e.to_string()))?;
        // `<<: *anchor` keys stay literal until merged
        document
            .apply_merge()
            .map_err(|e| Error::malformed(path, ConfigFormat::Yaml, None, e.to_string()))?;

        let root = match document {
            Value::Null => return Ok(ResolvedConfiguration::default()),
            Value::Mapping(root) => root,
            _ => {
                return Err(Error::malformed(
                    path,
                    ConfigFormat::Yaml,
                    None,
                    "top-level node must be a mapping",
                ));
            }
        };

        let section = match root.get(SECTION) {
            None | Some(Value::Null) => {
                tracing::debug!(path = %path.display(), "No sjl section, using defaults");
                return Ok(ResolvedConfiguration::default());
            }
            Some(Value::Mapping(section)) => section,
            Some(_) => return Err(Error::type_mismatch(path, SECTION, "a mapping")),
        };

        Ok(ResolvedConfiguration {
            java_home: string_entry(path, section, ConfigKey::JavaHome)?,
            lib_folder: string_entry(path, section, ConfigKey::LibFolder)?,
            temp_folder: string_entry(path, section, ConfigKey::TempFolder)?,
            args: sequence_entry(path, section, ConfigKey::Args)?,
        })
    }
}

fn string_entry(path: &Path, section: &Mapping, key: ConfigKey) -> Result<Option<String>> {
    match section.get(key.name()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(Error::type_mismatch(path, key.qualified(), "a string")),
    }
}

fn sequence_entry(path: &Path, section: &Mapping, key: ConfigKey) -> Result<Vec<String>> {
    let items = match section.get(key.name()) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Sequence(items)) => items,
        Some(_) => {
            return Err(Error::type_mismatch(
                path,
                key.qualified(),
                "a sequence of strings",
            ));
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(value) => Ok(value.clone()),
            _ => Err(Error::type_mismatch(
                path,
                format!("{}[{index}]", key.qualified()),
                "a string",
            )),
        })
        .collect()
}
