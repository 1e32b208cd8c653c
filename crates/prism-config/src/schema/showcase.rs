//! Project showcase configuration types.

use serde::{Deserialize, Serialize};

/// Staggered fade-in of the detail view's text and thumbnails.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EntranceConfig {
    pub duration: f32,
    /// Seconds the stagger is spread over, regardless of item count.
    pub stagger: f32,
    pub delay: f32,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            duration: 0.3,
            stagger: 0.5,
            delay: 0.2,
        }
    }
}

/// Full-size image viewer crossfade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    pub duration: f32,
    /// Horizontal slide distance in pixels for the outgoing image.
    pub slide_distance: f32,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            duration: 0.4,
            slide_distance: 40.0,
        }
    }
}

/// 3D showcase box behind the detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseSceneConfig {
    pub box_size: f32,
    pub video_size: f32,
    pub fog_far: f32,
    pub camera_z: f32,
    pub texture_size: u32,
}

impl Default for ShowcaseSceneConfig {
    fn default() -> Self {
        Self {
            box_size: 300.0,
            video_size: 50.0,
            fog_far: 1400.0,
            camera_z: 160.0,
            texture_size: 256,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Directory holding `profile.json`, `skills.json` and `projects.json`.
    pub content_dir: String,
    /// Shuffle project order on load.
    pub shuffle: bool,
    /// Videos only autoplay on viewports wider than this (pixels).
    pub video_min_width: f64,
    /// Viewports narrower than this use two-step tap selection (pixels).
    pub narrow_viewport: f64,
    pub entrance: EntranceConfig,
    pub lightbox: LightboxConfig,
    pub scene: ShowcaseSceneConfig,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            content_dir: "content".into(),
            shuffle: true,
            video_min_width: 600.0,
            narrow_viewport: 768.0,
            entrance: EntranceConfig::default(),
            lightbox: LightboxConfig::default(),
            scene: ShowcaseSceneConfig::default(),
        }
    }
}
