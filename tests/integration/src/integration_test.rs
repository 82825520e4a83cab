//! End-to-end integration test for the vertical slice
//!
//! This test exercises the complete flow: config discovery -> parsing ->
//! folder validation -> command assembly.

use pretty_assertions::assert_eq;
use sjl_config::ResolvedConfiguration;
use sjl_launcher::platform::{UNIX, WINDOWS};
use sjl_launcher::{LaunchInputs, LaunchResolver};
use sjl_test_utils::TestApp;
use sjl_test_utils::fixtures::config_fixture;

fn resolve(app: &TestApp) -> sjl_launcher::LaunchPlan {
    LaunchResolver::new(LaunchInputs::new(app.root()))
        .with_platform(&UNIX)
        .resolve()
        .unwrap()
}

#[test]
fn test_standard_application() {
    let app = TestApp::new()
        .with_config("config.yml", "sjl: {libFolder: \"lib\", args: []}\n")
        .with_jar("lib/sjl-2.0.jar")
        .with_runtime_home("jre");

    let plan = resolve(&app);

    assert_eq!(plan.temp_folder, app.path("temp"));
    assert_eq!(plan.pid_file_name, app.path("temp").join("sjl.pid"));
    assert!(plan.start_command.contains(&format!("{}/bin/java", app.path("jre").display())));
    assert!(plan.start_command.contains(&app.path("lib/sjl-2.0.jar").display().to_string()));
    app.assert_dir_exists("temp");
}

#[test]
fn test_windows_rendering_of_same_layout() {
    let app = TestApp::standard();

    let plan = LaunchResolver::new(LaunchInputs::new(app.root()))
        .with_platform(&WINDOWS)
        .resolve()
        .unwrap();

    assert!(plan.start_command.contains(r"\bin\java.exe"));
}

#[test]
fn test_both_fixture_formats_parse_the_same_fields() {
    let yaml = sjl_config::parse(&config_fixture("simple.yml")).unwrap();
    let properties = sjl_config::parse(&config_fixture("simple.properties")).unwrap();

    for config in [&yaml, &properties] {
        assert_eq!(config.java_home.as_deref(), Some("/javaHome"));
        assert_eq!(config.lib_folder.as_deref(), Some("/libFolder"));
        assert_eq!(config.temp_folder.as_deref(), Some("/tempFolder"));
    }
    assert_eq!(yaml.args, vec!["arg1=value1", "arg2=Значение"]);
    assert_eq!(properties.args, vec!["arg0", "arg1"]);
}

#[test]
fn test_yaml_config_rewritten_as_properties_resolves_identically() {
    let yaml_app = TestApp::standard().with_config(
        "config.yml",
        "sjl:\n  tempFolder: scratch\n  args:\n    - -Dname=a b\n    - '-Dpath=C:\\tmp'\n",
    );
    let yaml_plan = resolve(&yaml_app);

    let config = sjl_config::parse(&yaml_app.path("config.yml")).unwrap();
    std::fs::remove_file(yaml_app.path("config.yml")).unwrap();
    yaml_app.write("config.properties", &config.to_properties());
    let properties_plan = resolve(&yaml_app);

    assert_eq!(properties_plan.start_command, yaml_plan.start_command);
    assert_eq!(properties_plan.temp_folder, yaml_plan.temp_folder);
    assert_eq!(
        sjl_config::parse(&yaml_app.path("config.properties")).unwrap(),
        config
    );
}

#[test]
fn test_section_less_config_uses_every_default() {
    let app = TestApp::new()
        .with_jar("lib/sjl.jar")
        .with_runtime_home("jre");
    app.write(
        "application.yaml",
        &std::fs::read_to_string(config_fixture("application.yaml")).unwrap(),
    );

    let config = sjl_config::parse(&app.path("application.yaml")).unwrap();
    assert_eq!(config, ResolvedConfiguration::default());

    let plan = resolve(&app);
    assert_eq!(plan.config_file, app.path("application.yaml"));
    assert_eq!(plan.runtime_home, app.path("jre"));
}
