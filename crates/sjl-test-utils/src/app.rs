//! [`TestApp`] builder for launcher test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary application directory with helpers for laying out the files
/// a launch run looks at.
///
/// # Example
///
/// ```rust,no_run
/// use sjl_test_utils::TestApp;
///
/// let app = TestApp::new()
///     .with_config("config.yml", "sjl:\n  args: []\n")
///     .with_lib()
///     .with_jar("lib/sjl-2.0.jar")
///     .with_runtime_home("jre");
/// app.assert_dir_exists("lib");
/// ```
pub struct TestApp {
    temp_dir: TempDir,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    /// Create an empty application directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// The standard layout: `config.yml`, `lib/sjl-2.0.jar` and a `jre/`
    /// runtime home with `bin/java`.
    pub fn standard() -> Self {
        Self::new()
            .with_config("config.yml", "sjl:\n  libFolder: lib\n  args: []\n")
            .with_jar("lib/sjl-2.0.jar")
            .with_runtime_home("jre")
    }

    /// Root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `relative` joined onto the root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write a config file, creating parent directories.
    pub fn with_config(self, relative: &str, content: &str) -> Self {
        self.write(relative, content);
        self
    }

    /// Create the default `lib/` folder.
    pub fn with_lib(self) -> Self {
        self.with_dir("lib")
    }

    /// Create an empty directory (and its parents).
    pub fn with_dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.path(relative)).unwrap();
        self
    }

    /// Write an empty jar, creating its folder.
    pub fn with_jar(self, relative: &str) -> Self {
        self.write(relative, "");
        self
    }

    /// Create a runtime home containing `bin/java` and `bin/java.exe`.
    pub fn with_runtime_home(self, relative: &str) -> Self {
        self.write(&format!("{relative}/bin/java"), "");
        self.write(&format!("{relative}/bin/java.exe"), "");
        self
    }

    /// Write `content` at `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|err| panic!("Could not write {}: {err}", path.display()));
    }

    /// Assert that `relative` exists and is a directory.
    ///
    /// # Panics
    /// Panics with a descriptive message otherwise.
    pub fn assert_dir_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            full_path.is_dir(),
            "Expected directory to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `relative` does **not** exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_not_exists(&self, relative: &str) {
        let full_path = self.path(relative);
        assert!(
            !full_path.exists(),
            "Expected path NOT to exist: {}",
            full_path.display()
        );
    }
}
