//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::{PerformancePreset, PrismConfig};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_prism_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, prism_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[palette]
seed = "#ff0066"

[performance]
preset = "high"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.palette.seed, "#ff0066");
    assert_eq!(config.performance.preset, PerformancePreset::High);
    // Defaults preserved
    assert_eq!(config.scene.swarms.len(), 2);
    assert_eq!(config.motion.scroll.ease, "quad.out");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, prism_common::ConfigError::ParseError(_)));
}

#[test]
fn invalid_values_still_load_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[scene.camera]\nfov = 500.0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.scene.camera.fov - 500.0).abs() < f32::EPSILON);
}

#[test]
fn create_default_config_writes_parseable_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.palette.seed, PrismConfig::default().palette.seed);
}

#[test]
fn template_is_valid_toml() {
    let parsed: Result<PrismConfig, _> = toml::from_str(&default_config_toml());
    assert!(parsed.is_ok());
}

#[test]
fn default_config_path_ends_with_prism() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("prism/config.toml"));
    }
}
