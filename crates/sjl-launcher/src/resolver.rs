//! The resolution chain.

use std::path::{Path, PathBuf};

use sjl_config::ResolvedConfiguration;
use sjl_fs::{DefaultFolder, directory_exists, io, resolve_against};

use crate::artifact::find_launcher_artifact;
use crate::command::{CommandAssembler, LaunchTargets};
use crate::discovery::discover_config_file;
use crate::error::{Error, Result};
use crate::inputs::LaunchInputs;
use crate::plan::LaunchPlan;
use crate::platform::PlatformProfile;

/// Resolves [`LaunchInputs`] into a [`LaunchPlan`]
///
/// Holds no state between runs; calling [`resolve`](Self::resolve) twice
/// re-reads the filesystem each time.
#[derive(Debug, Clone)]
pub struct LaunchResolver {
    inputs: LaunchInputs,
    platform: &'static PlatformProfile,
}

impl LaunchResolver {
    /// Resolver for the platform this binary was built for.
    pub fn new(inputs: LaunchInputs) -> Self {
        Self {
            inputs,
            platform: PlatformProfile::current(),
        }
    }

    /// Render commands for another platform.
    #[must_use]
    pub fn with_platform(mut self, platform: &'static PlatformProfile) -> Self {
        self.platform = platform;
        self
    }

    /// Absolute working directory; it must exist.
    pub fn working_directory(&self) -> Result<PathBuf> {
        let path = resolve_against(&self.inputs.current_dir, self.inputs.working_dir_or_current());
        if !directory_exists(&path) {
            return Err(Error::WorkingDirectoryNotFound { path });
        }
        tracing::debug!(path = %path.display(), "Resolved working directory");
        Ok(path)
    }

    /// Discover and parse the config file of `working_dir`.
    pub fn load_configuration(&self, working_dir: &Path) -> Result<(PathBuf, ResolvedConfiguration)> {
        let config_file = discover_config_file(working_dir, self.inputs.config_file.as_deref())?;
        let config = sjl_config::parse(&config_file)?;
        tracing::debug!(
            path = %config_file.display(),
            args = config.args.len(),
            "Parsed configuration"
        );
        Ok((config_file, config))
    }

    /// Run the whole chain.
    pub fn resolve(&self) -> Result<LaunchPlan> {
        let working_dir = self.working_directory()?;
        let (config_file, config) = self.load_configuration(&working_dir)?;

        let lib_folder = folder(&working_dir, config.lib_folder.as_deref(), DefaultFolder::Lib);
        if !directory_exists(&lib_folder) {
            return Err(Error::LibFolderNotFound { path: lib_folder });
        }
        tracing::debug!(path = %lib_folder.display(), "Resolved lib folder");

        let temp_folder = folder(&working_dir, config.temp_folder.as_deref(), DefaultFolder::Temp);
        ensure_temp_folder(&temp_folder)?;

        let launcher_artifact = find_launcher_artifact(&lib_folder)?;

        let runtime_home = self.runtime_home(&working_dir, &config)?;

        let plan = CommandAssembler::new(self.platform).assemble(LaunchTargets {
            working_dir,
            config_file,
            runtime_home,
            launcher_artifact,
            temp_folder,
            args: config.args,
        });
        tracing::debug!(command = %plan.start_command, "Assembled start command");
        Ok(plan)
    }

    /// Config `javaHome`, else the `JAVA_HOME` input, else `jre`.
    fn runtime_home(&self, working_dir: &Path, config: &ResolvedConfiguration) -> Result<PathBuf> {
        let configured = non_empty(config.java_home.as_deref()).map(PathBuf::from);
        let source = match (&configured, &self.inputs.java_home) {
            (Some(_), _) => "config",
            (None, Some(_)) => "environment",
            (None, None) => "default",
        };
        let home = configured
            .or_else(|| self.inputs.java_home.clone())
            .unwrap_or_else(|| PathBuf::from(DefaultFolder::RuntimeHome.as_str()));

        let path = resolve_against(working_dir, home);
        if !directory_exists(&path) {
            return Err(Error::RuntimeHomeNotFound { path });
        }
        tracing::debug!(path = %path.display(), source, "Resolved runtime home");
        Ok(path)
    }
}

fn folder(working_dir: &Path, configured: Option<&str>, default: DefaultFolder) -> PathBuf {
    match non_empty(configured) {
        Some(path) => resolve_against(working_dir, path),
        None => {
            tracing::trace!(folder = %default, "Using default folder");
            working_dir.join(default.as_str())
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn ensure_temp_folder(path: &Path) -> Result<()> {
    match io::ensure_dir(path) {
        Ok(created) => {
            tracing::debug!(path = %path.display(), created, "Resolved temp folder");
            Ok(())
        }
        Err(err) => Err(Error::TempFolderCreationFailed {
            path: path.to_path_buf(),
            source: err.into_io(),
        }),
    }
}
