//! Settings loader tests

use tang_domain::constants::DEFAULT_MAX_RESOLUTION_DEPTH;
use tang_domain::Error;
use tang_infrastructure::config::{AppConfig, ConfigLoader};
use tang_infrastructure::constants::DEFAULT_LOG_LEVEL;
use tempfile::TempDir;

// A prefix no test environment sets, so ambient TANG_* variables never leak in
const ISOLATED_PREFIX: &str = "TANG_UNIT_TEST_UNSET";

#[test]
fn test_app_config_default() {
    let config = AppConfig::default();
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(!config.logging.json_format);
    assert_eq!(config.injector.max_resolution_depth, DEFAULT_MAX_RESOLUTION_DEPTH);
    assert_eq!(config.injector.options().max_resolution_depth, DEFAULT_MAX_RESOLUTION_DEPTH);
}

#[test]
fn test_missing_explicit_settings_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = ConfigLoader::new()
        .with_env_prefix(ISOLATED_PREFIX)
        .with_config_path(temp_dir.path().join("absent.toml"))
        .load()
        .unwrap_err();
    match err {
        Error::Configuration { message, .. } => assert!(message.contains("absent.toml")),
        other => panic!("Expected Configuration error, got {other:?}"),
    }
}

#[test]
fn test_settings_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tang.toml");
    std::fs::write(
        &path,
        "[logging]\nlevel = \"debug\"\n\n[injector]\nmax_resolution_depth = 32\n",
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_env_prefix(ISOLATED_PREFIX)
        .with_config_path(&path)
        .load()
        .unwrap();
    assert_eq!(config.logging.level, "debug");
    assert!(!config.logging.json_format);
    assert_eq!(config.injector.max_resolution_depth, 32);
}

#[test]
fn test_save_then_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("saved.toml");

    let mut original = AppConfig::default();
    original.logging.json_format = true;
    original.injector.max_resolution_depth = 8;

    let loader = ConfigLoader::new().with_env_prefix(ISOLATED_PREFIX);
    loader.save_to_file(&original, &path).unwrap();
    let loaded = loader.with_config_path(&path).load().unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_validation_rejects_zero_depth_and_bad_level() {
    let temp_dir = TempDir::new().unwrap();

    let zero = temp_dir.path().join("zero.toml");
    std::fs::write(&zero, "[injector]\nmax_resolution_depth = 0\n").unwrap();
    let err = ConfigLoader::new()
        .with_env_prefix(ISOLATED_PREFIX)
        .with_config_path(&zero)
        .load()
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));

    let level = temp_dir.path().join("level.toml");
    std::fs::write(&level, "[logging]\nlevel = \"loud\"\n").unwrap();
    let err = ConfigLoader::new()
        .with_env_prefix(ISOLATED_PREFIX)
        .with_config_path(&level)
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("Invalid log level"));
}

#[test]
fn test_malformed_settings_file_is_a_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    std::fs::write(&path, "[injector]\nmax_resolution_depth = \"deep\"\n").unwrap();

    let err = ConfigLoader::new()
        .with_env_prefix(ISOLATED_PREFIX)
        .with_config_path(&path)
        .load()
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));
}
