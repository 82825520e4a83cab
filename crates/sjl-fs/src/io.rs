//! Blocking I/O helpers that attach the offending path to every error.

use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Read a whole file as raw bytes.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Make sure `path` exists as a directory, creating one level if needed.
///
/// Parents are never created. Returns `true` when this call created the
/// directory. A concurrent creator winning the race is not an error.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    match fs::create_dir(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "Created directory");
            Ok(true)
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && path.is_dir() => Ok(false),
        Err(e) => Err(Error::io(path, e)),
    }
}

/// List the entries of a directory (non-recursive) in the order the OS returns them.
pub fn list_dir(path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(path).map_err(|e| Error::io(path, e))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(path, e))?;
        paths.push(entry.path());
    }
    Ok(paths)
}
