//! Lexical path resolution.
//!
//! Paths coming from the environment or a config file may be relative to the
//! working directory. They are joined and cleaned here without touching the
//! filesystem, so symlinks are never resolved.

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `base` unless it is already absolute.
///
/// The result is cleaned lexically and, on Windows, stripped of any `\\?\`
/// verbatim prefix so it can be handed to a shell.
pub fn resolve_against(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };
    clean(dunce::simplified(&joined))
}

/// Lexically normalize a path.
///
/// - `.` components are dropped
/// - `..` pops the previous normal component
/// - `..` directly under a root is dropped (nothing above the root)
/// - leading `..` of a relative path is kept
///
/// An empty result becomes `.`.
pub fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
