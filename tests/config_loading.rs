// tests/config_loading.rs

use std::io::Write;

use tempfile::NamedTempFile;
use workerkit::config::{ConfigFile, load_and_validate, load_or_default};
use workerkit::errors::ToolkitError;
use workerkit::{ReadReject, RunOptions};

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn full_config_is_parsed() {
    let file = config_file(
        r#"
[worker]
tag = "build"
color = "cyan"
timestamp = false
verbose = true

[run]
reject = false
cwd = "sub"

[read]
reject = "stderr"
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.worker.tag, "build");
    assert_eq!(cfg.worker.color.as_deref(), Some("cyan"));
    assert!(!cfg.worker.timestamp);
    assert!(cfg.worker.verbose);
    assert!(!cfg.run.reject);
    assert!(cfg.run.timestamp, "unset run.timestamp keeps its default");
    assert_eq!(cfg.run.cwd.as_deref(), Some(std::path::Path::new("sub")));
    assert_eq!(cfg.read.reject, ReadReject::Stderr);
}

#[test]
fn empty_file_uses_defaults() {
    let file = config_file("");
    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg, ConfigFile::default());
    assert_eq!(cfg.run, RunOptions::default());
    assert_eq!(cfg.read.reject, ReadReject::Unset);
}

#[test]
fn unknown_color_returns_config_error() {
    let file = config_file("[worker]\ntag = \"x\"\ncolor = \"plaid\"\n");

    match load_and_validate(file.path()) {
        Err(ToolkitError::ConfigError(msg)) => assert!(msg.contains("plaid")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn unknown_key_returns_toml_error() {
    let file = config_file("[run]\nrejekt = true\n");

    assert!(matches!(
        load_and_validate(file.path()),
        Err(ToolkitError::TomlError(_))
    ));
}

#[test]
fn missing_default_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Workerkit.toml");

    assert_eq!(load_or_default(&path, false).unwrap(), ConfigFile::default());
    assert!(matches!(
        load_or_default(&path, true),
        Err(ToolkitError::IoError(_))
    ));
}
