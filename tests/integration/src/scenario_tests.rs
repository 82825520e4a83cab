//! Scenario tests
//!
//! Concurrent runs, the binary against the library, and layouts that
//! exercise several resolution steps at once.

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use sjl_launcher::{ErrorKind, LaunchInputs, LaunchResolver};
use sjl_test_utils::TestApp;
use std::sync::Arc;
use std::thread;

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_concurrent_runs_share_temp_folder() {
    let app = Arc::new(TestApp::standard());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let app = Arc::clone(&app);
            thread::spawn(move || LaunchResolver::new(LaunchInputs::new(app.root())).resolve())
        })
        .collect();

    let plans: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();

    assert!(plans.windows(2).all(|pair| pair[0] == pair[1]));
    app.assert_dir_exists("temp");
}

// =============================================================================
// Binary vs library
// =============================================================================

#[test]
fn test_binary_json_matches_library_plan() {
    let app = TestApp::standard().with_config(
        "config/application.yml",
        "sjl:\n  args: [-Xss2m]\n",
    );

    let plan = LaunchResolver::new(LaunchInputs::new(app.root()))
        .resolve()
        .unwrap();

    let output = Command::cargo_bin("sjl")
        .unwrap()
        .env_remove("sjl.workingDirectory")
        .env_remove("sjl.configFile")
        .env_remove("JAVA_HOME")
        .current_dir(app.root())
        .args(["plan", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::to_value(&plan).unwrap());
}

// =============================================================================
// Layouts
// =============================================================================

#[test]
fn test_nested_config_with_shared_runtime() {
    let shared = TestApp::new().with_runtime_home("jdk-17");
    let app = TestApp::new()
        .with_config(
            "config/config.properties",
            "sjl.libFolder = app/lib\nsjl.args.0 = -Dfile.encoding=UTF-8\n",
        )
        .with_jar("app/lib/sjl-3.1.0.jar")
        .with_jar("app/lib/commons-io-2.0.jar");

    let inputs = LaunchInputs::new(app.root()).with_java_home(shared.path("jdk-17"));
    let plan = LaunchResolver::new(inputs).resolve().unwrap();

    assert_eq!(plan.launcher_artifact, app.path("app/lib/sjl-3.1.0.jar"));
    assert_eq!(plan.runtime_home, shared.path("jdk-17"));
    assert!(plan.start_command.contains("-Dfile.encoding=UTF-8 com.vga.sjl.SjlBoot"));
}

#[test]
fn test_lib_folder_relative_climb_is_cleaned() {
    let app = TestApp::new()
        .with_config("service/config.yml", "sjl:\n  libFolder: ../shared/./lib\n  javaHome: ../jre\n")
        .with_jar("shared/lib/sjl.jar")
        .with_runtime_home("jre");

    let inputs = LaunchInputs::new(app.root()).with_working_dir("service");
    let plan = LaunchResolver::new(inputs).resolve().unwrap();

    assert_eq!(plan.launcher_artifact, app.path("shared/lib/sjl.jar"));
    assert_eq!(plan.runtime_home, app.path("jre"));
    assert_eq!(plan.temp_folder, app.path("service/temp"));
}

#[test]
fn test_failures_stop_before_later_steps() {
    let app = TestApp::new()
        .with_config("config.yml", "sjl: {}\n")
        .with_lib()
        .with_runtime_home("jre");

    let err = LaunchResolver::new(LaunchInputs::new(app.root()))
        .resolve()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::LauncherArtifactNotFound);
    // the temp folder step precedes the artifact lookup
    app.assert_dir_exists("temp");
}
