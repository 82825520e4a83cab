//! Command assembly from validated paths.

use std::path::PathBuf;

use sjl_fs::PID_FILE_NAME;

use crate::plan::LaunchPlan;
use crate::platform::PlatformProfile;

/// Main class inside the launcher artifact
pub const ENTRY_POINT: &str = "com.vga.sjl.SjlBoot";

/// Validated inputs of the command assembler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchTargets {
    pub working_dir: PathBuf,
    pub config_file: PathBuf,
    pub runtime_home: PathBuf,
    pub launcher_artifact: PathBuf,
    pub temp_folder: PathBuf,
    /// Extra arguments placed between the classpath and the entry point
    pub args: Vec<String>,
}

/// Builds the shell commands of a [`LaunchPlan`] for one platform.
///
/// The three path segments are wrapped in double quotes; nothing else is
/// escaped, and paths containing `"` are not supported.
#[derive(Debug, Clone, Copy)]
pub struct CommandAssembler<'a> {
    platform: &'a PlatformProfile,
}

impl<'a> CommandAssembler<'a> {
    pub fn new(platform: &'a PlatformProfile) -> Self {
        Self { platform }
    }

    pub fn assemble(&self, targets: LaunchTargets) -> LaunchPlan {
        let prefix = self.command_prefix(&targets);
        let pid_file_name = targets.temp_folder.join(PID_FILE_NAME);

        LaunchPlan {
            start_command: prefix.clone(),
            stop_command: format!("{prefix} stop"),
            status_command: format!("{prefix} status"),
            temp_folder: targets.temp_folder,
            pid_file_name,
            working_dir: targets.working_dir,
            config_file: targets.config_file,
            runtime_home: targets.runtime_home,
            launcher_artifact: targets.launcher_artifact,
        }
    }

    /// `cd "<wd>" && "<java>" -cp "<jar>" [args...] <entry point>`
    fn command_prefix(&self, targets: &LaunchTargets) -> String {
        let java = self.platform.java_executable_in(&targets.runtime_home);
        let mut command = format!(
            "{} {} && {} -cp {}",
            self.platform.change_dir,
            quote(&targets.working_dir.display().to_string()),
            quote(&java),
            quote(&targets.launcher_artifact.display().to_string()),
        );
        for arg in &targets.args {
            command.push(' ');
            command.push_str(arg);
        }
        command.push(' ');
        command.push_str(ENTRY_POINT);
        command
    }
}

fn quote(segment: &str) -> String {
    format!("\"{segment}\"")
}
