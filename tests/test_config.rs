use rbuild::config::BuildConfig;
use rbuild::error::Error;

#[test]
fn test_default_config() {
    let config = BuildConfig::default();

    assert_eq!(config.compiler(), "gcc");
    assert_eq!(config.sources(), ["./src/*.c"]);
    assert_eq!(config.error_flags(), ["-Wall", "-Werror", "-Wextra"]);
    assert_eq!(config.lang_flags(), ["-std=c99", "-g"]);
    assert_eq!(config.output_path(), "build/out");
}

#[test]
fn test_load_path() {
    let dir = tempfile::tempdir().unwrap();
    let config_filepath = dir.path().join("rbuild.toml");
    std::fs::write(
        &config_filepath,
        r#"
compiler = "gcc"
sources = ["a.c"]
error_flags = ["-Wall"]
lang_flags = []
include_paths = ["./inc"]
library_paths = []
link_libraries = ["m"]
output_path = "build/out"
"#,
    )
    .unwrap();

    let config = BuildConfig::load_path(&config_filepath).unwrap();
    assert_eq!(config.compiler(), "gcc");
    assert_eq!(config.sources(), ["a.c"]);
    assert_eq!(config.link_libraries(), ["m"]);
}

#[test]
fn test_load_path_to_spec_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config_filepath = dir.path().join("rbuild.toml");
    std::fs::write(
        &config_filepath,
        r#"
compiler = "gcc"
sources = ["a.c"]
error_flags = ["-Wall"]
lang_flags = []
include_paths = ["./inc"]
library_paths = []
link_libraries = ["m"]
output_path = "build/out"
"#,
    )
    .unwrap();

    let spec = BuildConfig::load_path(&config_filepath)
        .unwrap()
        .to_spec()
        .unwrap();
    assert_eq!(
        spec.compose().unwrap(),
        "gcc a.c -Wall -I ./inc -lm -o build/out"
    );
}

#[test]
fn test_to_spec_expands_source_globs() {
    let dir = tempfile::tempdir().unwrap();
    let src_dir = dir.path().join("src");
    std::fs::create_dir(&src_dir).unwrap();
    for name in ["main.c", "video.c", "video.h"] {
        std::fs::write(src_dir.join(name), "").unwrap();
    }

    let config_filepath = dir.path().join("rbuild.toml");
    std::fs::write(
        &config_filepath,
        format!(
            r#"
compiler = "gcc"
sources = ["{}/*.c"]
error_flags = []
lang_flags = []
include_paths = []
library_paths = []
link_libraries = []
output_path = "build/out"
"#,
            src_dir.display()
        ),
    )
    .unwrap();

    let spec = BuildConfig::load_path(&config_filepath)
        .unwrap()
        .to_spec()
        .unwrap();
    let tokens = spec.tokens().unwrap();

    // Both .c files and nothing else, between the compiler and the flags
    assert_eq!(tokens.iter().filter(|t| t.ends_with(".c")).count(), 2);
    assert!(!tokens.iter().any(|t| t.ends_with(".h")));
}

#[test]
fn test_to_spec_fails_on_unmatched_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let config_filepath = dir.path().join("rbuild.toml");
    std::fs::write(
        &config_filepath,
        format!(
            r#"
compiler = "gcc"
sources = ["{}/*.c"]
error_flags = []
lang_flags = []
include_paths = []
library_paths = []
link_libraries = []
output_path = "build/out"
"#,
            dir.path().display()
        ),
    )
    .unwrap();

    let result = BuildConfig::load_path(&config_filepath).unwrap().to_spec();
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}
