//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use backdrop::config::AppConfig;
use serial_test::serial;
use std::fs;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("BACKDROP_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("BACKDROP_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_nested_numbers() {
    std::env::set_var("BACKDROP_DRIFT__SEED", "42");
    std::env::set_var("BACKDROP_CAMERA__FOV", "60.0");
    let config = AppConfig::load();
    std::env::remove_var("BACKDROP_DRIFT__SEED");
    std::env::remove_var("BACKDROP_CAMERA__FOV");

    let config = config.unwrap();
    assert_eq!(config.drift.seed, Some(42));
    assert_eq!(config.camera.fov, 60.0);
    assert_eq!(config.animator_settings(Vec::new()).seed, Some(42));
}

#[test]
#[serial]
fn test_shipped_defaults_match_code_defaults() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy("config/default.toml", dir.path().join("default.toml")).unwrap();

    let from_file = AppConfig::load_from(dir.path()).unwrap();
    let builtin = AppConfig::default();

    assert_eq!(from_file.window.title, builtin.window.title);
    assert_eq!(from_file.camera.fov, builtin.camera.fov);
    assert_eq!(from_file.camera.distance, builtin.camera.distance);
    assert_eq!(from_file.drift.bounds, builtin.drift.bounds);
    assert_eq!(from_file.drift.spawn_extent, builtin.drift.spawn_extent);
    assert_eq!(from_file.lighting.ambient_intensity, builtin.lighting.ambient_intensity);
    assert_eq!(from_file.assets.manifest, builtin.assets.manifest);
    assert_eq!(from_file.rendering.background_color, builtin.rendering.background_color);
}

#[test]
#[serial]
fn test_user_config_overrides_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[window]\ntitle = \"Default\"\nwidth = 800\n",
    )
    .unwrap();
    fs::write(dir.path().join("user.toml"), "[window]\ntitle = \"User\"\n").unwrap();

    let config = AppConfig::load_from(dir.path()).unwrap();
    assert_eq!(config.window.title, "User");
    assert_eq!(config.window.width, 800);
}

#[test]
#[serial]
fn test_missing_config_dir_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load_from(dir.path().join("nowhere")).unwrap();
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.debug.log_level, "info");
}

#[test]
#[serial]
fn test_malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("default.toml"), "[camera]\nfov = \"wide\"\n").unwrap();

    let err = AppConfig::load_from(dir.path()).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error:"));
}
