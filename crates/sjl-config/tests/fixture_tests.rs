//! Parsing the shared configuration files under test-fixtures/configs/

use pretty_assertions::assert_eq;
use sjl_config::{Error, ResolvedConfiguration, parse};
use std::path::PathBuf;

/// Path to the config fixtures (relative to the workspace root).
fn fixture(name: &str) -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // crates/sjl-config -> ../../test-fixtures
    manifest_dir.join("../../test-fixtures/configs").join(name)
}

#[test]
fn test_simple_properties() {
    let config = parse(&fixture("simple.properties")).unwrap();

    assert_eq!(
        config,
        ResolvedConfiguration {
            java_home: Some("/javaHome".into()),
            lib_folder: Some("/libFolder".into()),
            temp_folder: Some("/tempFolder".into()),
            args: vec!["arg0".into(), "arg1".into()],
        }
    );
}

#[test]
fn test_simple_yaml() {
    let config = parse(&fixture("simple.yml")).unwrap();

    assert_eq!(config.java_home.as_deref(), Some("/javaHome"));
    assert_eq!(config.lib_folder.as_deref(), Some("/libFolder"));
    assert_eq!(config.temp_folder.as_deref(), Some("/tempFolder"));
    assert_eq!(config.args, vec!["arg1=value1", "arg2=Значение"]);
}

#[test]
fn test_yaml_without_launcher_section() {
    let config = parse(&fixture("application.yaml")).unwrap();
    assert_eq!(config, ResolvedConfiguration::default());
}

#[test]
fn test_yaml_args_must_be_a_sequence() {
    let err = parse(&fixture("bad-args.yml")).unwrap_err();

    assert!(matches!(err, Error::TypeMismatch { .. }), "got {err:?}");
    assert_eq!(err.key(), Some("sjl.args"));
}

#[test]
fn test_missing_file_is_an_fs_error() {
    let err = parse(&fixture("does-not-exist.yml")).unwrap_err();
    assert!(matches!(err, Error::Fs(_)), "got {err:?}");
}
