//! The validated result of a resolution run.

use serde::Serialize;
use std::path::PathBuf;

/// Everything a process supervisor needs to start the application
///
/// Only produced when every resolution step succeeded: all paths are
/// absolute and existed (or, for the temp folder, were just created) when
/// the plan was returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPlan {
    /// Shell command starting the application
    pub start_command: String,
    /// Shell command asking a running application to stop
    pub stop_command: String,
    /// Shell command querying a running application's status
    pub status_command: String,
    /// Scratch directory
    pub temp_folder: PathBuf,
    /// Where the supervisor is expected to write the PID file
    pub pid_file_name: PathBuf,
    pub working_dir: PathBuf,
    pub config_file: PathBuf,
    pub runtime_home: PathBuf,
    pub launcher_artifact: PathBuf,
}
