//! Integration tests for configuration loading and validation.
//!
//! Exercises real files via tempdirs; no mocks.

use sp_config::{validate, ObfuscationConfig, PatternSpec, ValidationWarning};

#[test]
fn test_load_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("obfuscation.json");

    let config = ObfuscationConfig::new(vec![
        PatternSpec::new("password").check_key(true),
        PatternSpec::new("[0-9]{16}")
            .check_data(true)
            .replace_regex("[0-9]{4}"),
    ]);
    config.save(&path).unwrap();

    let loaded = ObfuscationConfig::load(&path).unwrap();
    assert!(loaded.enabled);
    assert_eq!(loaded.patterns.len(), 2);
    assert_eq!(loaded.patterns[0].pattern, "password");
    assert!(loaded.patterns[0].check_key);
    assert_eq!(loaded.patterns[1].replace_regex.as_deref(), Some("[0-9]{4}"));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ObfuscationConfig::load(dir.path().join("missing.json")).unwrap_err();
    assert_eq!(err.code(), 70);
}

#[test]
fn test_load_malformed_json_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = ObfuscationConfig::load(&path).unwrap_err();
    assert_eq!(err.code(), 71);
}

#[test]
fn test_load_applies_field_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("minimal.json");
    std::fs::write(&path, r#"{"patterns": [{"pattern": "secret"}]}"#).unwrap();

    let config = ObfuscationConfig::load(&path).unwrap();
    assert!(config.enabled);
    assert!(!config.patterns[0].check_key);
    assert!(!config.patterns[0].check_data);
    assert!(!config.patterns[0].case_insensitive);
}

#[test]
fn test_loaded_config_validates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "enabled": true,
            "patterns": [
                {"pattern": "token", "check_key": true},
                {"pattern": "inert_rule"}
            ]
        }"#,
    )
    .unwrap();

    let config = ObfuscationConfig::load(&path).unwrap();
    let warnings = validate(&config).unwrap();
    assert_eq!(warnings, vec![ValidationWarning::InertPattern { index: 1 }]);
}

#[test]
fn test_validation_rejects_config_the_engine_would_reject() {
    let config = ObfuscationConfig::new(vec![PatternSpec::new("[[a-z]").check_key(true)]);
    assert!(validate(&config).is_err());
}
