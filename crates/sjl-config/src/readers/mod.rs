//! Format readers

pub mod properties;
mod yaml;

pub use self::properties::PropertiesReader;
pub use self::yaml::YamlReader;
