use std::fs;

use imgprobe::{BmpHeightPolicy, ConfigError, ProbeConfig};
use tempfile::tempdir;

#[test]
fn test_config_from_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("probe.json");
    fs::write(
        &path,
        r#"{ "initial_bytes": 512, "max_attempts": 4, "bmp_height": "corrected" }"#,
    )
    .unwrap();

    let config = ProbeConfig::from_json_file(&path).unwrap();
    assert_eq!(config.initial_bytes, 512);
    assert_eq!(config.max_attempts, 4);
    assert_eq!(config.growth_factor, 2);
    assert_eq!(config.bmp_height, BmpHeightPolicy::Corrected);
}

#[test]
fn test_config_from_json_file_validates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("probe.json");
    fs::write(&path, r#"{ "initial_bytes": 4096, "max_bytes": 1024 }"#).unwrap();

    let err = ProbeConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "max_bytes", .. }));
}

#[test]
fn test_config_from_malformed_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("probe.json");
    fs::write(&path, "{ initial_bytes: ").unwrap();

    let err = ProbeConfig::from_json_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_config_missing_file() {
    let dir = tempdir().unwrap();
    let err = ProbeConfig::from_json_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
