//! Tests for config document loading

use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;

use zmfc::config::{parse_config, read_config};
use zmfc::error::ZmfError;

#[test]
fn read_yaml_file() {
    let mut file = NamedTempFile::with_suffix(".yml").unwrap();
    writeln!(file, "applName: APP").unwrap();
    writeln!(file, "packageTitle: fancy package title").unwrap();
    writeln!(file, "workChangeRequest: 42").unwrap();

    let config = read_config(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.get("applName"), Some(&json!("APP")));
    assert_eq!(config.get("packageTitle"), Some(&json!("fancy package title")));
    assert_eq!(config.get("workChangeRequest"), Some(&json!(42)));
}

#[test]
fn read_toml_file() {
    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    writeln!(file, "applName = \"APP\"").unwrap();
    writeln!(file, "packageTitle = \"fancy package title\"").unwrap();

    let config = read_config(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.get("applName"), Some(&json!("APP")));
    assert_eq!(config.get("packageTitle"), Some(&json!("fancy package title")));
}

#[test]
fn toml_extension_is_case_insensitive() {
    let config = parse_config("pkg.TOML", "applName = \"APP\"").unwrap();
    assert_eq!(config.get("applName"), Some(&json!("APP")));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = read_config("does/not/exist.yml").unwrap_err();
    assert!(matches!(err, ZmfError::Config { .. }));
    assert!(err.to_string().contains("does/not/exist.yml"));
}

#[test]
fn unparseable_document_is_a_config_error() {
    let err = parse_config("pkg.toml", "applName = ").unwrap_err();
    assert!(matches!(err, ZmfError::Config { .. }));
}

#[test]
fn non_mapping_top_level_is_a_config_error() {
    let err = parse_config("pkg.yml", "- just\n- a\n- list\n").unwrap_err();
    assert!(matches!(err, ZmfError::Config { .. }));
}
