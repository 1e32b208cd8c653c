//! Post-processing effects configuration types.
//!
//! Bloom and film grain are only applied when the render profile allows
//! post-processing; these settings tune them when it does.

use serde::{Deserialize, Serialize};

/// Bloom (light bleed) effect settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    pub enabled: bool,
    /// Bloom brightness multiplier (valid range: 0.0-3.0).
    pub intensity: f32,
    /// Luminance above which pixels bloom (valid range: 0.0-1.0).
    pub luminance_threshold: f32,
    /// Softness of the threshold knee (valid range: 0.0-1.0).
    pub luminance_smoothing: f32,
    pub mipmap_blur: bool,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            intensity: 1.0,
            luminance_threshold: 0.3,
            luminance_smoothing: 0.9,
            mipmap_blur: true,
        }
    }
}

/// Film grain overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilmGrainConfig {
    pub enabled: bool,
    /// Grain amplitude (valid range: 0.0-1.0).
    pub intensity: f32,
}

impl Default for FilmGrainConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            intensity: 0.35,
        }
    }
}

/// Master effects configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Master toggle; disables all effects when false.
    pub enabled: bool,
    pub bloom: BloomConfig,
    pub film_grain: FilmGrainConfig,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            bloom: BloomConfig::default(),
            film_grain: FilmGrainConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effects_config_defaults() {
        let config = EffectsConfig::default();
        assert!(config.enabled);
        assert!(config.bloom.enabled);
        assert!((config.bloom.intensity - 1.0).abs() < f32::EPSILON);
        assert!((config.bloom.luminance_threshold - 0.3).abs() < f32::EPSILON);
        assert!((config.bloom.luminance_smoothing - 0.9).abs() < f32::EPSILON);
        assert!(config.bloom.mipmap_blur);
        assert!(config.film_grain.enabled);
    }

    #[test]
    fn bloom_config_partial_toml() {
        let toml_str = r#"
intensity = 1.5
luminance_threshold = 0.5
"#;
        let config: BloomConfig = toml::from_str(toml_str).unwrap();
        assert!(config.enabled); // default preserved
        assert!((config.intensity - 1.5).abs() < f32::EPSILON);
        assert!((config.luminance_threshold - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn effects_master_toggle_in_toml() {
        let config: EffectsConfig = toml::from_str("enabled = false").unwrap();
        assert!(!config.enabled);
        // Sub-configs still have their defaults
        assert!(config.bloom.enabled);
        assert!(config.film_grain.enabled);
    }

    #[test]
    fn effects_full_toml() {
        let toml_str = r#"
enabled = true

[bloom]
enabled = false

[film_grain]
intensity = 0.1
"#;
        let config: EffectsConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.bloom.enabled);
        assert!((config.film_grain.intensity - 0.1).abs() < f32::EPSILON);
    }
}
