//! Per-platform details of the start command.
//!
//! The Windows family and everything else differ in where the runtime keeps
//! its executable and in how the shell changes directory. Both live in one
//! table keyed by target family (`std::env::consts::FAMILY`), so adding a
//! platform means adding a row.

use std::path::Path;

/// Shell and runtime layout conventions of one target family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    /// Target family this row applies to (`"unix"`, `"windows"`)
    pub family: &'static str,
    /// Runtime executable, relative to the runtime home
    pub java_executable: &'static [&'static str],
    /// Separator used when rendering the executable path
    pub separator: char,
    /// Shell verb that changes the working directory
    pub change_dir: &'static str,
}

pub const UNIX: PlatformProfile = PlatformProfile {
    family: "unix",
    java_executable: &["bin", "java"],
    separator: '/',
    change_dir: "cd",
};

pub const WINDOWS: PlatformProfile = PlatformProfile {
    family: "windows",
    java_executable: &["bin", "java.exe"],
    separator: '\\',
    change_dir: "cd /d",
};

/// Known platforms. Families without a row use [`UNIX`].
pub static PLATFORMS: &[PlatformProfile] = &[UNIX, WINDOWS];

impl PlatformProfile {
    /// Profile for a target family name.
    pub fn for_family(family: &str) -> &'static PlatformProfile {
        PLATFORMS
            .iter()
            .find(|profile| profile.family == family)
            .unwrap_or(&UNIX)
    }

    /// Profile of the platform this binary was built for.
    pub fn current() -> &'static PlatformProfile {
        Self::for_family(std::env::consts::FAMILY)
    }

    /// Render the runtime executable path under `runtime_home`.
    pub fn java_executable_in(&self, runtime_home: &Path) -> String {
        let home = runtime_home.display().to_string();
        let trimmed = home.trim_end_matches(self.separator);
        let mut rendered = if trimmed.is_empty() { home.as_str() } else { trimmed }.to_string();
        for segment in self.java_executable {
            if !rendered.ends_with(self.separator) {
                rendered.push(self.separator);
            }
            rendered.push_str(segment);
        }
        rendered
    }
}
