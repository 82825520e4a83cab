//! Launcher artifact lookup inside the lib folder.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use sjl_fs::{io, path_exists};

use crate::error::{Error, Result};

/// `sjl`, then any run of hyphens, dots and digits, then `.jar`
pub static LAUNCHER_ARTIFACT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^sjl[-.0-9]*\.jar$").unwrap());

/// True if `file_name` names a launcher artifact.
pub fn is_launcher_artifact(file_name: &str) -> bool {
    LAUNCHER_ARTIFACT_PATTERN.is_match(file_name)
}

/// First launcher artifact in `lib_folder`, in directory-listing order.
///
/// Only the folder itself is scanned, never subfolders. Directories with a
/// matching name are skipped; a match that is not a regular file (broken
/// symlink, socket, ...) fails the lookup.
pub fn find_launcher_artifact(lib_folder: &Path) -> Result<PathBuf> {
    let matched = io::list_dir(lib_folder)?.into_iter().find(|entry| {
        !entry.is_dir()
            && entry
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(is_launcher_artifact)
    });

    match matched {
        Some(path) if path_exists(&path) => {
            tracing::debug!(path = %path.display(), "Found launcher artifact");
            Ok(path)
        }
        _ => Err(Error::LauncherArtifactNotFound {
            path: lib_folder.to_path_buf(),
        }),
    }
}
