//! Config file discovery: explicit override, else the fixed candidate list.

use std::path::{Path, PathBuf};

use sjl_fs::{ConfigCandidate, path_exists, resolve_against};

use crate::error::{Error, Result};

/// First candidate that exists as a file under `working_dir`, in probe order.
pub fn first_existing_candidate(working_dir: &Path) -> Option<(ConfigCandidate, PathBuf)> {
    ConfigCandidate::ALL.into_iter().find_map(|candidate| {
        let path = candidate.under(working_dir);
        let found = path_exists(&path);
        tracing::debug!(candidate = %candidate, found, "Probing config candidate");
        found.then_some((candidate, path))
    })
}

/// Locate the config file for a run.
///
/// An override is used verbatim (relative to `working_dir` when relative)
/// and must exist; the candidate list is not consulted in that case.
pub fn discover_config_file(working_dir: &Path, override_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(override_path) = override_path {
        let path = resolve_against(working_dir, override_path);
        if !path_exists(&path) {
            return Err(Error::ConfigFileNotFound {
                path,
                searched: Vec::new(),
            });
        }
        tracing::debug!(path = %path.display(), "Using config file override");
        return Ok(path);
    }

    match first_existing_candidate(working_dir) {
        Some((candidate, path)) => {
            tracing::debug!(%candidate, path = %path.display(), "Discovered config file");
            Ok(path)
        }
        None => Err(Error::ConfigFileNotFound {
            path: working_dir.to_path_buf(),
            searched: ConfigCandidate::ALL.to_vec(),
        }),
    }
}
