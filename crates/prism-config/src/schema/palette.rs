//! Palette and gradient-backdrop configuration types.

use serde::{Deserialize, Serialize};

/// Seed color and gradient-backdrop behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Base color every palette is hue-rotated from.
    pub seed: String,
    /// CSS gradient angle in degrees.
    pub gradient_angle: f64,
    pub backdrop: BackdropConfig,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            seed: "#ccff00".into(),
            gradient_angle: 42.0,
            backdrop: BackdropConfig::default(),
        }
    }
}

/// Rotating gradient background.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    /// Colors in every backdrop palette (valid range: 1-12).
    pub base_colors: u32,
    /// Up to this many extra colors when the evenly spaced mode is picked (valid range: 0-6).
    pub max_extra_colors: u32,
    /// Chance of picking the evenly spaced mode (valid range: 0.0-1.0).
    pub even_chance: f64,
    /// Seconds an old layer takes to fade out.
    pub fade_duration: f32,
    /// Minimum seconds between palette changes.
    pub interval_min: f32,
    /// Random extra seconds added to `interval_min`.
    pub interval_spread: f32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            base_colors: 3,
            max_extra_colors: 3,
            even_chance: 0.5,
            fade_duration: 5.0,
            interval_min: 5.0,
            interval_spread: 10.0,
        }
    }
}
