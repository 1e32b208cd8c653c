//! Header scene composition parameters.
//!
//! Sizes are in scene units, durations in seconds. Every group the header
//! composer builds has its own sub-table so a partial config can tune a
//! single piece without restating the rest.

use serde::{Deserialize, Serialize};

/// Perspective camera settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees (valid range: 10-120).
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 50.0,
            near: 0.1,
            far: 20000.0,
            position: [0.0, 2.0, 130.0],
        }
    }
}

/// Linear fog range; the fog color comes from the palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FogConfig {
    pub near: f32,
    pub far: f32,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            near: 1.0,
            far: 450.0,
        }
    }
}

/// Entry transition of the main group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub initial_scale: f32,
    /// Seconds before the group becomes visible.
    pub show_delay: f32,
    /// Seconds before the grow-in starts.
    pub scale_delay: f32,
    pub scale_duration: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            initial_scale: 0.00002,
            show_delay: 0.5,
            scale_delay: 1.0,
            scale_duration: 6.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WireframeBoxConfig {
    pub size: f32,
    /// Segments per side (valid range: 1-64).
    pub segments: u32,
    pub opacity: f32,
    /// Seconds per full z rotation.
    pub spin_duration: f32,
}

impl Default for WireframeBoxConfig {
    fn default() -> Self {
        Self {
            size: 2000.0,
            segments: 12,
            opacity: 0.1,
            spin_duration: 150.0,
        }
    }
}

/// One swarm of textured polyhedra.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwarmConfig {
    pub amount: u32,
    /// Half extents of the spawn volume.
    pub container: [f32; 3],
    /// Full width of the wander volume on every axis.
    pub wander_range: f32,
    /// Base seconds per wander leg.
    pub speed: f32,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            amount: 5,
            container: [120.0, 200.0, 50.0],
            wander_range: 250.0,
            speed: 10.0,
        }
    }
}

fn default_swarms() -> Vec<SwarmConfig> {
    vec![
        SwarmConfig::default(),
        SwarmConfig {
            container: [30.0, 75.0, 20.0],
            ..SwarmConfig::default()
        },
    ]
}

/// Metallic shapes plus emissive light carriers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    pub shape_count: u32,
    pub shape_range: f32,
    pub shape_speed: f32,
    pub bright_range: f32,
    pub bright_speed: f32,
    pub light_intensity: f32,
    pub light_distance: f32,
    /// Seconds per full y rotation of the cluster group.
    pub spin_duration: f32,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            shape_count: 10,
            shape_range: 10.0,
            shape_speed: 100.0,
            bright_range: 150.0,
            bright_speed: 2.0,
            light_intensity: 2000.0,
            light_distance: 500.0,
            spin_duration: 20.0,
        }
    }
}

/// Point-sprite field appearance. Counts come from the render profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleLayerConfig {
    pub size_min: f32,
    pub size_spread: f32,
    pub opacity: f32,
    pub container: [f32; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticlesConfig {
    pub small: ParticleLayerConfig,
    pub large: ParticleLayerConfig,
    /// Side length of generated sprite textures in pixels.
    pub sprite_size: u32,
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            small: ParticleLayerConfig {
                size_min: 0.5,
                size_spread: 1.0,
                opacity: 0.4,
                container: [200.0, 250.0, 200.0],
            },
            large: ParticleLayerConfig {
                size_min: 10.0,
                size_spread: 30.0,
                opacity: 0.7,
                container: [150.0, 150.0, 150.0],
            },
            sprite_size: 64,
        }
    }
}

impl Default for ParticleLayerConfig {
    fn default() -> Self {
        ParticlesConfig::default().small
    }
}

/// Header scene configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub fog: FogConfig,
    pub reveal: RevealConfig,
    pub wireframe: WireframeBoxConfig,
    pub swarms: Vec<SwarmConfig>,
    pub cluster: ClusterConfig,
    pub particles: ParticlesConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            fog: FogConfig::default(),
            reveal: RevealConfig::default(),
            wireframe: WireframeBoxConfig::default(),
            swarms: default_swarms(),
            cluster: ClusterConfig::default(),
            particles: ParticlesConfig::default(),
        }
    }
}
