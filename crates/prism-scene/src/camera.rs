//! Rendering surface size and the perspective camera bound to it.

use prism_common::SceneError;
use prism_config::schema::CameraConfig;

use crate::graph::NodeId;
use crate::matrix::{self, Mat4};

/// CSS size of the canvas and the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Result<Self, SceneError> {
        if !(width > 0.0 && height > 0.0 && pixel_ratio > 0.0) {
            return Err(SceneError::InvalidBounds(format!(
                "surface {width}x{height} @{pixel_ratio}"
            )));
        }
        Ok(Self {
            width,
            height,
            pixel_ratio,
        })
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }

    /// Drawing-buffer size in device pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width * self.pixel_ratio).round() as u32,
            (self.height * self.pixel_ratio).round() as u32,
        )
    }
}

#[derive(Debug, Clone)]
pub struct PerspectiveCamera {
    pub node: NodeId,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    surface: Surface,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(node: NodeId, config: &CameraConfig, surface: Surface) -> Self {
        let mut camera = Self {
            node,
            fov: config.fov,
            near: config.near,
            far: config.far,
            surface,
            projection: matrix::IDENTITY,
        };
        camera.update_projection();
        camera
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn aspect(&self) -> f32 {
        self.surface.aspect()
    }

    pub fn resize(&mut self, surface: Surface) {
        self.surface = surface;
        self.update_projection();
    }

    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    fn update_projection(&mut self) {
        self.projection = matrix::perspective(
            self.fov.to_radians(),
            self.surface.aspect(),
            self.near,
            self.far,
        );
    }
}
