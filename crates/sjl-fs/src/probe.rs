//! Stateless existence checks.
//!
//! Every call goes to the filesystem; nothing is cached between calls.
//! Access errors (permission denied, broken symlinks, ...) are reported
//! as absence, since the launcher cannot tell the two apart anyway.

use std::path::Path;

/// True iff `path` exists and is a regular file (symlinks are followed).
pub fn path_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// True iff `path` exists and is a directory (symlinks are followed).
pub fn directory_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}
