//! Launcher configuration parsing
//!
//! Reads the `sjl` section of a configuration file into a
//! [`ResolvedConfiguration`]. Two syntaxes are understood, selected by the
//! file name suffix:
//!
//! - `.properties`: flat `sjl.*` keys
//! - `.yaml` / `.yml`: an `sjl` mapping
//!
//! ```ignore
//! let config = sjl_config::parse(Path::new("/app/config.yml"))?;
//! println!("{:?}", config.lib_folder);
//! ```

pub mod error;
pub mod format;
pub mod keys;
pub mod model;
pub mod readers;

pub use error::{Error, Result};
pub use format::{ConfigFormat, ConfigReader};
pub use keys::ConfigKey;
pub use model::ResolvedConfiguration;

use std::path::Path;

/// Parse the configuration file at `path`.
///
/// The format is chosen from the file name suffix alone; the content is
/// never sniffed.
pub fn parse(path: &Path) -> Result<ResolvedConfiguration> {
    let format = ConfigFormat::from_path(path)?;
    tracing::debug!(path = %path.display(), %format, "Parsing launcher configuration");
    let source = sjl_fs::io::read_bytes(path)?;
    format.reader().read(path, &source)
}
