//! 3D scene composition for prism.
//!
//! Builds renderer-agnostic scene graphs for the header and the project
//! showcase, generates their palettes and textures, classifies the device
//! into a render profile, and owns every GPU resource it allocates through
//! the [`RenderBackend`] seam.

pub mod camera;
pub mod composer;
pub mod effects;
pub mod events;
pub mod geometry;
pub mod graph;
pub mod matrix;
pub mod palette;
pub mod resources;
pub mod showcase_scene;
pub mod texture;
pub mod tier;

pub use camera::{PerspectiveCamera, Surface};
pub use composer::{HeaderScene, SceneAnimator, Teardown};
pub use effects::{BloomPass, PostEffects};
pub use events::SceneEvent;
pub use graph::{Node, NodeId, NodeKey, NodeKind, NodeProp, SceneGraph};
pub use palette::{hover_accent, HoverAccent, Palette};
pub use resources::{HeadlessBackend, MaterialDesc, RenderBackend, ResourceId, ResourceScope};
pub use showcase_scene::ShowcaseScene;
pub use tier::{DeviceSignals, GpuInfo, Precision, RenderProfile, Tier};
