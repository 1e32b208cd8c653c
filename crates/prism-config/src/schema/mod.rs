//! Configuration schema types for prism.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod effects;
mod motion;
mod palette;
mod performance;
mod scene;
mod showcase;
mod system;

pub use effects::*;
pub use motion::*;
pub use palette::*;
pub use performance::*;
pub use scene::*;
pub use showcase::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PrismConfig {
    pub palette: PaletteConfig,
    pub scene: SceneConfig,
    pub motion: MotionConfig,
    pub performance: PerformanceConfig,
    pub effects: EffectsConfig,
    pub showcase: ShowcaseConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: PrismConfig = toml::from_str("").unwrap();
        assert_eq!(config.palette.seed, "#ccff00");
        assert_eq!(config.performance.preset, PerformancePreset::Auto);
        assert_eq!(config.scene.swarms.len(), 2);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn mixed_sections_in_toml() {
        let toml_str = r##"
[palette]
seed = "#fb0097"

[performance]
preset = "low"

[motion.scroll]
camera_factor = -0.3

[showcase]
shuffle = false
"##;
        let config: PrismConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.palette.seed, "#fb0097");
        assert_eq!(config.performance.preset, PerformancePreset::Low);
        assert!((config.motion.scroll.camera_factor + 0.3).abs() < f64::EPSILON);
        assert!(!config.showcase.shuffle);
        // Untouched sections keep defaults
        assert!((config.scene.fog.far - 450.0).abs() < f32::EPSILON);
        assert!(config.effects.bloom.enabled);
    }

    #[test]
    fn config_roundtrips_through_toml() {
        let config = PrismConfig::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: PrismConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.palette.seed, config.palette.seed);
        assert_eq!(parsed.scene.swarms.len(), config.scene.swarms.len());
        assert_eq!(parsed.performance.budgets.low, config.performance.budgets.low);
    }
}
