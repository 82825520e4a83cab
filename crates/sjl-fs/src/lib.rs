//! Filesystem primitives for the sjl launcher
//!
//! Provides existence probes, lexical path resolution and the fixed
//! path constants consulted while resolving a launch configuration.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod probe;

pub use constants::{ConfigCandidate, DefaultFolder, PID_FILE_NAME};
pub use error::{Error, Result};
pub use path::{clean, resolve_against};
pub use probe::{directory_exists, path_exists};
