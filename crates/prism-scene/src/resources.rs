//! GPU resource seam.
//!
//! Scene code never talks to a graphics API directly. It asks a
//! [`RenderBackend`] for geometries, textures, materials and videos and
//! gets opaque [`ResourceId`]s back; a [`ResourceScope`] remembers every id
//! a component acquired so teardown (or a failed build) releases them all.

use std::collections::HashMap;

use image::RgbaImage;
use prism_common::{Color, SceneError};
use tracing::{debug, warn};

use crate::geometry::GeometryDesc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Geometry,
    Texture,
    Material,
    Video,
}

/// Which faces of a mesh are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

/// Shading model of a material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shading {
    /// Unlit.
    Basic,
    /// Physically based (metalness/roughness).
    #[default]
    Standard,
    /// Screen-facing point sprites.
    Points,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDesc {
    pub shading: Shading,
    pub color: Color,
    pub emissive: Option<Color>,
    pub texture: Option<ResourceId>,
    pub opacity: f32,
    pub transparent: bool,
    pub wireframe: bool,
    pub side: Side,
    pub metalness: f32,
    pub roughness: f32,
    pub flat_shading: bool,
    pub fog: bool,
    /// Point size for [`Shading::Points`].
    pub size: f32,
}

impl Default for MaterialDesc {
    fn default() -> Self {
        Self {
            shading: Shading::Standard,
            color: Color::from_u32(0xffffff),
            emissive: None,
            texture: None,
            opacity: 1.0,
            transparent: false,
            wireframe: false,
            side: Side::Front,
            metalness: 0.0,
            roughness: 1.0,
            flat_shading: false,
            fog: true,
            size: 1.0,
        }
    }
}

impl MaterialDesc {
    pub fn basic(color: Color) -> Self {
        Self {
            shading: Shading::Basic,
            color,
            ..Self::default()
        }
    }

    pub fn standard(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn points(texture: ResourceId, size: f32, opacity: f32) -> Self {
        Self {
            shading: Shading::Points,
            texture: Some(texture),
            size,
            opacity,
            transparent: true,
            ..Self::default()
        }
    }

    pub fn with_texture(mut self, texture: ResourceId) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Sets the opacity and marks the material transparent.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self.transparent = true;
        self
    }

    pub fn wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }

    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    pub fn with_pbr(mut self, metalness: f32, roughness: f32) -> Self {
        self.metalness = metalness;
        self.roughness = roughness;
        self
    }

    pub fn with_emissive(mut self, emissive: Color) -> Self {
        self.emissive = Some(emissive);
        self
    }

    pub fn flat(mut self) -> Self {
        self.flat_shading = true;
        self
    }

    pub fn without_fog(mut self) -> Self {
        self.fog = false;
        self
    }
}

/// Allocates and frees GPU-side objects for a rendering surface.
pub trait RenderBackend {
    fn create_geometry(&mut self, desc: &GeometryDesc) -> Result<ResourceId, SceneError>;
    fn create_texture(&mut self, image: &RgbaImage) -> Result<ResourceId, SceneError>;
    fn create_material(&mut self, desc: &MaterialDesc) -> Result<ResourceId, SceneError>;
    /// Start loading a video texture.
    fn create_video(&mut self, url: &str) -> Result<ResourceId, SceneError>;
    /// Free a resource. Returns `false` if the id was not live.
    fn release(&mut self, id: ResourceId) -> bool;
    fn live_resources(&self) -> usize;
}

/// Backend that only does bookkeeping.
///
/// Used by the CLI session and by tests to check that every allocation is
/// eventually released.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    live: HashMap<ResourceId, (ResourceKind, usize)>,
    next_id: u64,
    created: usize,
    fail_after: Option<usize>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose allocations start failing after `n` successes.
    pub fn failing_after(n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::default()
        }
    }

    pub fn live_of(&self, kind: ResourceKind) -> usize {
        self.live.values().filter(|(k, _)| *k == kind).count()
    }

    /// Bytes currently held by live geometries and textures.
    pub fn live_bytes(&self) -> usize {
        self.live.values().map(|(_, bytes)| bytes).sum()
    }

    /// Total allocations over the backend's lifetime.
    pub fn created(&self) -> usize {
        self.created
    }

    pub fn kind_of(&self, id: ResourceId) -> Option<ResourceKind> {
        self.live.get(&id).map(|(kind, _)| *kind)
    }

    fn allocate(&mut self, kind: ResourceKind, bytes: usize) -> Result<ResourceId, SceneError> {
        if self.fail_after.is_some_and(|n| self.created >= n) {
            return Err(SceneError::Backend(format!(
                "allocation of {kind:?} refused after {} resources",
                self.created
            )));
        }
        self.next_id += 1;
        self.created += 1;
        let id = ResourceId(self.next_id);
        self.live.insert(id, (kind, bytes));
        Ok(id)
    }
}

impl RenderBackend for HeadlessBackend {
    fn create_geometry(&mut self, desc: &GeometryDesc) -> Result<ResourceId, SceneError> {
        self.allocate(ResourceKind::Geometry, desc.byte_len())
    }

    fn create_texture(&mut self, image: &RgbaImage) -> Result<ResourceId, SceneError> {
        self.allocate(ResourceKind::Texture, image.as_raw().len())
    }

    fn create_material(&mut self, _desc: &MaterialDesc) -> Result<ResourceId, SceneError> {
        self.allocate(ResourceKind::Material, 0)
    }

    fn create_video(&mut self, url: &str) -> Result<ResourceId, SceneError> {
        if url.is_empty() {
            return Err(SceneError::Backend("empty video url".into()));
        }
        self.allocate(ResourceKind::Video, 0)
    }

    fn release(&mut self, id: ResourceId) -> bool {
        self.live.remove(&id).is_some()
    }

    fn live_resources(&self) -> usize {
        self.live.len()
    }
}

/// Every resource a component acquired, for release in one call.
///
/// Dropping a scope that still holds resources logs a leak; call
/// [`ResourceScope::release_all`] on teardown and on failed builds.
#[derive(Debug)]
pub struct ResourceScope {
    label: &'static str,
    held: Vec<ResourceId>,
}

impl ResourceScope {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            held: Vec::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn contains(&self, id: ResourceId) -> bool {
        self.held.contains(&id)
    }

    fn track(&mut self, id: ResourceId) -> ResourceId {
        self.held.push(id);
        id
    }

    pub fn geometry(
        &mut self,
        backend: &mut dyn RenderBackend,
        desc: &GeometryDesc,
    ) -> Result<ResourceId, SceneError> {
        backend.create_geometry(desc).map(|id| self.track(id))
    }

    pub fn texture(
        &mut self,
        backend: &mut dyn RenderBackend,
        image: &RgbaImage,
    ) -> Result<ResourceId, SceneError> {
        backend.create_texture(image).map(|id| self.track(id))
    }

    pub fn material(
        &mut self,
        backend: &mut dyn RenderBackend,
        desc: &MaterialDesc,
    ) -> Result<ResourceId, SceneError> {
        backend.create_material(desc).map(|id| self.track(id))
    }

    pub fn video(&mut self, backend: &mut dyn RenderBackend, url: &str) -> Result<ResourceId, SceneError> {
        backend.create_video(url).map(|id| self.track(id))
    }

    /// Release one resource early (e.g. a swapped-out texture).
    pub fn release(&mut self, backend: &mut dyn RenderBackend, id: ResourceId) -> bool {
        let Some(pos) = self.held.iter().position(|h| *h == id) else {
            return false;
        };
        self.held.swap_remove(pos);
        backend.release(id)
    }

    /// Release everything, newest first. Returns how many were freed.
    pub fn release_all(&mut self, backend: &mut dyn RenderBackend) -> usize {
        let mut released = 0;
        while let Some(id) = self.held.pop() {
            if backend.release(id) {
                released += 1;
            }
        }
        if released > 0 {
            debug!(scope = self.label, released, "released resources");
        }
        released
    }
}

impl Drop for ResourceScope {
    fn drop(&mut self) {
        if !self.held.is_empty() {
            warn!(
                scope = self.label,
                leaked = self.held.len(),
                "resource scope dropped without release"
            );
        }
    }
}
