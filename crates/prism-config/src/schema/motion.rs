//! Scroll binding and reveal configuration types.

use serde::{Deserialize, Serialize};

/// Damped scroll-to-transform mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Header camera y per pixel of scroll offset.
    pub camera_factor: f64,
    /// Header group y rotation (radians) per pixel of scroll offset.
    pub rotation_factor: f64,
    /// Showcase camera y per pixel of the container's top edge.
    pub showcase_factor: f64,
    /// Damping tween duration in seconds (valid range: 0.0-5.0).
    pub damping: f32,
    /// Easing of the damping tween.
    pub ease: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            camera_factor: -0.15,
            rotation_factor: -0.0007,
            showcase_factor: 0.13,
            damping: 0.5,
            ease: "quad.out".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub scroll: ScrollConfig,
    /// Pixels above the viewport bottom an element must pass to reveal.
    pub reveal_threshold: f64,
    /// Frames longer than this many milliseconds are treated as lag.
    pub lag_threshold_ms: f64,
    /// Step used instead of a lagging frame, in milliseconds.
    pub lag_step_ms: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            scroll: ScrollConfig::default(),
            reveal_threshold: 100.0,
            lag_threshold_ms: 500.0,
            lag_step_ms: 33.0,
        }
    }
}
