use pretty_assertions::assert_eq;
use rstest::rstest;
use sjl_fs::{clean, resolve_against};
use std::path::{Path, PathBuf};

#[rstest]
#[case("a/b/c", "a/b/c")]
#[case("a/./b", "a/b")]
#[case("a//b", "a/b")]
#[case("a/b/..", "a")]
#[case("a/..", ".")]
#[case("../a", "../a")]
#[case("../../a/b", "../../a/b")]
#[case("a/../../b", "../b")]
#[case(".", ".")]
#[case("", ".")]
fn test_clean_relative(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(clean(Path::new(input)), PathBuf::from(expected));
}

#[cfg(unix)]
mod unix_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    #[case("/a/b/../../c", "/c")]
    #[case("/..", "/")]
    #[case("/../a", "/a")]
    #[case("/a/./b/", "/a/b")]
    fn test_clean_absolute(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(clean(Path::new(input)), PathBuf::from(expected));
    }

    #[rstest]
    #[case("/app", "lib", "/app/lib")]
    #[case("/app", "./lib", "/app/lib")]
    #[case("/app", "../shared/jre", "/shared/jre")]
    #[case("/app", "/opt/java", "/opt/java")]
    #[case("/app", "/opt/java/../jdk", "/opt/jdk")]
    #[case("/app/", "config/config.yml", "/app/config/config.yml")]
    fn test_resolve_against(#[case] base: &str, #[case] input: &str, #[case] expected: &str) {
        assert_eq!(
            resolve_against(Path::new(base), input),
            PathBuf::from(expected)
        );
    }

    #[test]
    fn test_resolved_relative_path_is_absolute() {
        let resolved = resolve_against(Path::new("/app"), "temp");
        assert!(resolved.is_absolute());
    }
}

#[cfg(windows)]
mod windows_tests {
    use super::*;

    #[test]
    fn test_verbatim_prefix_is_stripped() {
        let resolved = resolve_against(Path::new(r"C:\app"), r"\\?\C:\app\lib");
        assert_eq!(resolved, PathBuf::from(r"C:\app\lib"));
    }

    #[test]
    fn test_relative_windows_segments() {
        let resolved = resolve_against(Path::new(r"C:\app"), r"lib\..\jre");
        assert_eq!(resolved, PathBuf::from(r"C:\app\jre"));
    }
}
