//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = PrismConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_invalid_seed_color() {
    let mut config = PrismConfig::default();
    config.palette.seed = "chartreuse".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.seed"));
}

#[test]
fn hsl_seed_is_accepted() {
    let mut config = PrismConfig::default();
    config.palette.seed = "hsl(72, 100%, 50%)".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_even_chance_out_of_range() {
    let mut config = PrismConfig::default();
    config.palette.backdrop.even_chance = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.backdrop.even_chance"));
}

#[test]
fn catches_zero_base_colors() {
    let mut config = PrismConfig::default();
    config.palette.backdrop.base_colors = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("palette.backdrop.base_colors"));
}

#[test]
fn catches_fov_out_of_range() {
    let mut config = PrismConfig::default();
    config.scene.camera.fov = 170.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.camera.fov"));
}

#[test]
fn catches_inverted_fog_range() {
    let mut config = PrismConfig::default();
    config.scene.fog.near = 500.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.fog.far"));
}

#[test]
fn catches_flat_swarm_container() {
    let mut config = PrismConfig::default();
    config.scene.swarms[1].container = [30.0, 0.0, 20.0];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.swarms[1].container"));
}

#[test]
fn catches_zero_particle_budget() {
    let mut config = PrismConfig::default();
    config.performance.budgets.medium.small_particles = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("performance.budgets.medium.small_particles"));
}

#[test]
fn catches_unknown_ease() {
    let mut config = PrismConfig::default();
    config.motion.scroll.ease = "wobble.out".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("motion.scroll.ease"));
}

#[test]
fn accepts_parameterized_ease() {
    let mut config = PrismConfig::default();
    config.motion.scroll.ease = "back.out(1.2)".into();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_lag_step_above_threshold() {
    let mut config = PrismConfig::default();
    config.motion.lag_step_ms = 900.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("motion.lag_step_ms"));
}

#[test]
fn catches_bloom_intensity_too_high() {
    let mut config = PrismConfig::default();
    config.effects.bloom.intensity = 4.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("effects.bloom.intensity"));
}

#[test]
fn catches_empty_content_dir() {
    let mut config = PrismConfig::default();
    config.showcase.content_dir = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("showcase.content_dir"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = PrismConfig::default();
    config.scene.camera.fov = 1.0;
    config.performance.frame_rate = 1000;
    config.scene.wireframe.segments = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("scene.camera.fov"));
    assert!(err.contains("performance.frame_rate"));
    assert!(err.contains("scene.wireframe.segments"));
}
