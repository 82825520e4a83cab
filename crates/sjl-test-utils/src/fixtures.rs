//! Checked-in fixture files.

use std::path::PathBuf;

/// Root of the workspace `test-fixtures/` directory.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("test-fixtures")
}

/// A file under `test-fixtures/configs/`.
///
/// # Panics
/// Panics if the fixture does not exist.
pub fn config_fixture(name: &str) -> PathBuf {
    let path = fixtures_root().join("configs").join(name);
    assert!(path.is_file(), "Missing fixture: {}", path.display());
    path
}
