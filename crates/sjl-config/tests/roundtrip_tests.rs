//! Reading back what `to_properties` writes yields the same configuration.

use proptest::prelude::*;
use sjl_config::{ResolvedConfiguration, parse};
use std::fs;
use tempfile::TempDir;

fn value() -> impl Strategy<Value = String> {
    "[ -~\t\nа-яё]{0,16}"
}

fn configuration() -> impl Strategy<Value = ResolvedConfiguration> {
    (
        proptest::option::of(value()),
        proptest::option::of(value()),
        proptest::option::of(value()),
        proptest::collection::vec(value(), 0..6),
    )
        .prop_map(|(java_home, lib_folder, temp_folder, args)| ResolvedConfiguration {
            java_home,
            lib_folder,
            temp_folder,
            args,
        })
}

proptest! {
    #[test]
    fn test_properties_roundtrip(config in configuration()) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.properties");
        fs::write(&path, config.to_properties()).unwrap();

        let reparsed = parse(&path).unwrap();
        prop_assert_eq!(config, reparsed);
    }
}
