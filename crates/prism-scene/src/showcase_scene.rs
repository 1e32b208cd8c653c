//! The project showcase's 3D scene.
//!
//! A back-face-textured box inside two wireframe shells shows the active
//! project's image; a tetrahedron beside it plays the project's video.
//! Swapping the image crossfades: the old box fades out, is torn down with
//! its material and texture, and a new one fades in.

use std::str::FromStr;

use image::RgbaImage;
use prism_common::{Color, Hsl, Rect, SceneError, Vec3};
use prism_config::PrismConfig;
use prism_motion::{Direction, Ease, OwnerId, ScrollBinder, ScrollMode, TweenSpec};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::camera::{PerspectiveCamera, Surface};
use crate::composer::{SceneAnimator, Teardown};
use crate::events::SceneEvent;
use crate::geometry::{GeometryDesc, PolyhedronKind};
use crate::graph::{Fog, Light, Node, NodeId, NodeKey, NodeKind, NodeProp, SceneGraph};
use crate::palette::random_hue;
use crate::resources::{MaterialDesc, RenderBackend, ResourceId, ResourceScope, Side};

/// Per-frame rotation of the project group at 60 fps; the video group
/// turns the opposite way.
const DRIFT: Vec3 = Vec3::new(0.001, 0.0008, -0.0009);
const SHELLS: [(f32, u32, f32); 2] = [(0.9, 6, 0.1), (0.95, 2, 0.4)];

#[derive(Debug)]
struct ProjectMesh {
    node: NodeId,
    material: ResourceId,
    texture: ResourceId,
}

#[derive(Debug)]
struct VideoMesh {
    node: NodeId,
    material: ResourceId,
    video: ResourceId,
    ready: bool,
}

/// Nodes and shared geometries built once per scene.
struct StaticParts {
    project_group: NodeId,
    video_group: NodeId,
    box_geometry: ResourceId,
    video_geometry: ResourceId,
    placeholder: NodeId,
}

pub struct ShowcaseScene {
    graph: SceneGraph,
    animator: SceneAnimator,
    scope: ResourceScope,
    owner: OwnerId,
    rng: StdRng,
    seed: Color,
    camera: PerspectiveCamera,
    scroll: ScrollBinder<NodeKey>,
    project_group: NodeId,
    video_group: NodeId,
    box_geometry: ResourceId,
    video_geometry: ResourceId,
    project: Option<ProjectMesh>,
    pending: Option<RgbaImage>,
    placeholder: Option<NodeId>,
    video: Option<VideoMesh>,
    disposed: bool,
}

impl ShowcaseScene {
    pub fn new(
        config: &PrismConfig,
        surface: Surface,
        seed: Color,
        backend: &mut dyn RenderBackend,
        rng_seed: u64,
    ) -> Result<Self, SceneError> {
        let mut scope = ResourceScope::new("showcase");
        let mut graph = SceneGraph::new();
        let mut rng = StdRng::seed_from_u64(rng_seed);

        let built = Self::build_static(config, seed, &mut graph, &mut scope, backend, &mut rng);
        let parts = match built {
            Ok(parts) => parts,
            Err(e) => {
                scope.release_all(backend);
                warn!(error = %e, "showcase scene build failed");
                return Err(e);
            }
        };

        let scene = &config.showcase.scene;
        let mut camera_config = config.scene.camera.clone();
        camera_config.position = [0.0, 2.0, scene.camera_z];
        let camera_node = graph.add(
            None,
            Node::new("camera", NodeKind::Camera).at(Vec3::from(camera_config.position)),
        );
        let camera = PerspectiveCamera::new(camera_node, &camera_config, surface);

        let mut animator = SceneAnimator::new();
        let owner = animator.new_owner();
        let scroll_cfg = &config.motion.scroll;
        let ease = Ease::from_str(&scroll_cfg.ease).unwrap_or(Ease::QUAD_OUT);
        let scroll = ScrollBinder::new(owner, ScrollMode::ReferenceTop, scroll_cfg.damping, ease)
            .bind((camera_node, NodeProp::PositionY), scroll_cfg.showcase_factor);

        info!(resources = scope.len(), "showcase scene built");
        Ok(Self {
            graph,
            animator,
            scope,
            owner,
            rng,
            seed,
            camera,
            scroll,
            project_group: parts.project_group,
            video_group: parts.video_group,
            box_geometry: parts.box_geometry,
            video_geometry: parts.video_geometry,
            project: None,
            pending: None,
            placeholder: Some(parts.placeholder),
            video: None,
            disposed: false,
        })
    }

    fn build_static(
        config: &PrismConfig,
        seed: Color,
        graph: &mut SceneGraph,
        scope: &mut ResourceScope,
        backend: &mut dyn RenderBackend,
        rng: &mut StdRng,
    ) -> Result<StaticParts, SceneError> {
        let scene = &config.showcase.scene;
        let fog_color = seed.to_hsl();
        graph.fog = Some(Fog {
            color: fog_color,
            near: 1.0,
            far: scene.fog_far,
        });
        graph.background = Some(fog_color);

        graph.add(
            None,
            Node::new(
                "ambient",
                NodeKind::Light(Light::Ambient {
                    color: Color::from_u32(0xfafafa),
                    intensity: 1.5,
                }),
            ),
        );
        graph.add(
            None,
            Node::new(
                "key-light",
                NodeKind::Light(Light::Directional {
                    color: Color::from_u32(0x00ccff),
                    intensity: 1.0,
                }),
            ),
        );

        let project_group = graph.add(None, Node::group("project"));
        let video_group = graph.add(None, Node::group("video"));

        let box_geometry = scope.geometry(
            backend,
            &GeometryDesc::Box {
                size: scene.box_size,
                segments: 6,
            },
        )?;
        for (scale, segments, opacity) in SHELLS {
            let geometry = scope.geometry(
                backend,
                &GeometryDesc::Box {
                    size: scene.box_size * scale,
                    segments,
                },
            )?;
            let color = random_hue(seed, rng);
            let material = scope.material(
                backend,
                &MaterialDesc::basic(color.to_color())
                    .wireframe()
                    .with_opacity(opacity),
            )?;
            graph.add(
                Some(project_group),
                Node::new("shell", NodeKind::Mesh { geometry, material })
                    .with_opacity(opacity)
                    .with_color(color),
            );
        }

        let video_geometry = scope.geometry(
            backend,
            &GeometryDesc::Polyhedron {
                kind: PolyhedronKind::Tetrahedron,
                radius: scene.video_size,
                detail: 0,
            },
        )?;
        let placeholder_color = Color::from_rgba(rng.gen(), rng.gen(), rng.gen(), 255);
        let material = scope.material(backend, &MaterialDesc::standard(placeholder_color).flat())?;
        let placeholder = graph.add(
            Some(video_group),
            Node::new(
                "video-placeholder",
                NodeKind::Mesh {
                    geometry: video_geometry,
                    material,
                },
            )
            .scaled(Vec3::splat(0.9)),
        );

        Ok(StaticParts {
            project_group,
            video_group,
            box_geometry,
            video_geometry,
            placeholder,
        })
    }

    /// Show `image` on the box. The first image fades in; later ones
    /// crossfade, and only the newest of several quick swaps is kept.
    pub fn show_texture(
        &mut self,
        image: RgbaImage,
        backend: &mut dyn RenderBackend,
    ) -> Result<(), SceneError> {
        self.recolor();
        match self.project_mesh_node() {
            None => {
                self.build_project_mesh(&image, backend, 1.0)?;
                let mut grow = TweenSpec::new(0.5).ease(Ease::QUAD_IN_OUT);
                for prop in NodeProp::SCALE {
                    grow = grow.from((self.project_group, prop), 0.8);
                }
                self.animator.add(self.owner, grow);
                if let Some(node) = self.project_mesh_node() {
                    self.animator.add(
                        self.owner,
                        TweenSpec::new(0.5)
                            .from_to((node, NodeProp::Opacity), 0.0, 1.0)
                            .ease(Ease::QUAD_IN_OUT),
                    );
                }
            }
            Some(node) => {
                let fading = self.pending.replace(image).is_some();
                if fading {
                    debug!("texture swap already fading; replacing pending image");
                    return Ok(());
                }
                self.animator
                    .kill_matching(|(n, p)| *n == node && *p == NodeProp::Opacity);
                self.animator.add(
                    self.owner,
                    TweenSpec::new(0.2)
                        .to((node, NodeProp::Opacity), 0.0)
                        .ease(Ease::QUAD_OUT)
                        .on_complete(SceneEvent::TextureFadedOut),
                );
            }
        }
        Ok(())
    }

    fn project_mesh_node(&self) -> Option<NodeId> {
        self.project.as_ref().map(|p| p.node)
    }

    fn build_project_mesh(
        &mut self,
        image: &RgbaImage,
        backend: &mut dyn RenderBackend,
        opacity: f32,
    ) -> Result<(), SceneError> {
        let texture = self.scope.texture(backend, image)?;
        let material = match self.scope.material(
            backend,
            &MaterialDesc::standard(Color::from_u32(0x777777))
                .with_texture(texture)
                .with_pbr(0.0, 0.5)
                .with_side(Side::Back)
                .with_opacity(opacity),
        ) {
            Ok(material) => material,
            Err(e) => {
                self.scope.release(backend, texture);
                return Err(e);
            }
        };
        let node = self.graph.add(
            Some(self.project_group),
            Node::new(
                "project-box",
                NodeKind::Mesh {
                    geometry: self.box_geometry,
                    material,
                },
            )
            .with_opacity(opacity),
        );
        self.project = Some(ProjectMesh {
            node,
            material,
            texture,
        });
        Ok(())
    }

    fn teardown_project_mesh(&mut self, backend: &mut dyn RenderBackend) {
        if let Some(old) = self.project.take() {
            self.graph.remove(old.node);
            self.scope.release(backend, old.material);
            self.scope.release(backend, old.texture);
        }
    }

    fn swap_in_pending(&mut self, backend: &mut dyn RenderBackend) -> Result<(), SceneError> {
        let Some(image) = self.pending.take() else {
            return Ok(());
        };
        self.teardown_project_mesh(backend);
        self.build_project_mesh(&image, backend, 0.0)?;
        if let Some(node) = self.project_mesh_node() {
            self.animator.add(
                self.owner,
                TweenSpec::new(0.3)
                    .to((node, NodeProp::Opacity), 1.0)
                    .ease(Ease::Power {
                        power: 1,
                        dir: Direction::In,
                    }),
            );
        }
        let pop = Ease::Back {
            overshoot: 1.2,
            dir: Direction::Out,
        };
        let mut spec = TweenSpec::new(0.5).ease(pop);
        for prop in NodeProp::SCALE {
            spec = spec.from_to((self.project_group, prop), 0.98, 1.0);
        }
        self.animator.add(self.owner, spec);
        debug!("project texture swapped");
        Ok(())
    }

    /// Fog and background take a fresh rotation of the seed.
    fn recolor(&mut self) {
        let color = random_hue(self.seed, &mut self.rng);
        if let Some(fog) = self.graph.fog.as_mut() {
            fog.color = color;
        }
        self.graph.background = Some(color);
    }

    /// Start loading `url` on the tetrahedron. It appears once
    /// [`ShowcaseScene::on_video_ready`] is called.
    pub fn show_video(&mut self, url: &str, backend: &mut dyn RenderBackend) -> Result<(), SceneError> {
        self.clear_video(backend);
        let video = self.scope.video(backend, url)?;
        let material = match self.scope.material(
            backend,
            &MaterialDesc::basic(Color::from_u32(0xffffff)).with_texture(video),
        ) {
            Ok(material) => material,
            Err(e) => {
                self.scope.release(backend, video);
                return Err(e);
            }
        };
        let node = self.graph.add(
            Some(self.video_group),
            Node::new(
                "video",
                NodeKind::Mesh {
                    geometry: self.video_geometry,
                    material,
                },
            )
            .hidden(),
        );
        self.video = Some(VideoMesh {
            node,
            material,
            video,
            ready: false,
        });
        debug!(url, "video requested");
        Ok(())
    }

    /// The video has data: grow it in and shrink the placeholder away.
    pub fn on_video_ready(&mut self) {
        let Some(video) = self.video.as_mut() else {
            return;
        };
        if video.ready {
            return;
        }
        video.ready = true;
        let node = video.node;
        if let Some(n) = self.graph.get_mut(node) {
            n.visible = true;
        }
        let mut grow = TweenSpec::new(1.0).ease(Ease::back(Direction::Out));
        for prop in NodeProp::SCALE {
            grow = grow.from((node, prop), 0.0001);
        }
        self.animator.add(self.owner, grow);

        if let Some(placeholder) = self.placeholder {
            let mut shrink = TweenSpec::new(1.0)
                .ease(Ease::back(Direction::In))
                .on_complete(SceneEvent::PlaceholderHidden);
            for prop in NodeProp::SCALE {
                shrink = shrink.to((placeholder, prop), 0.0001);
            }
            self.animator.add(self.owner, shrink);
        }
    }

    /// Remove the video mesh, e.g. on narrow viewports.
    pub fn clear_video(&mut self, backend: &mut dyn RenderBackend) {
        if let Some(old) = self.video.take() {
            self.animator.kill_matching(|(n, _)| *n == old.node);
            self.graph.remove(old.node);
            self.scope.release(backend, old.material);
            self.scope.release(backend, old.video);
        }
    }

    fn hide_placeholder(&mut self, backend: &mut dyn RenderBackend) {
        if let Some(node) = self.placeholder.take() {
            for id in self.graph.remove(node) {
                // The tetrahedron geometry is shared with the video mesh.
                if id != self.video_geometry {
                    self.scope.release(backend, id);
                }
            }
        }
    }

    /// Advance one frame.
    pub fn tick(
        &mut self,
        dt: f32,
        backend: &mut dyn RenderBackend,
    ) -> Result<Vec<SceneEvent>, SceneError> {
        let events = self.animator.tick(dt, &mut self.graph);
        let frames = dt * 60.0;
        if let Some(group) = self.graph.get_mut(self.project_group) {
            group.rotation = group.rotation + DRIFT * frames;
        }
        if let Some(group) = self.graph.get_mut(self.video_group) {
            group.rotation = group.rotation - DRIFT * frames;
        }
        for event in &events {
            match event {
                SceneEvent::TextureFadedOut => self.swap_in_pending(backend)?,
                SceneEvent::PlaceholderHidden => self.hide_placeholder(backend),
                SceneEvent::Revealed => {}
            }
        }
        Ok(events)
    }

    /// `reference` is the showcase container's bounding box.
    pub fn on_scroll(&mut self, reference: Option<&Rect>) -> bool {
        self.scroll.on_scroll(&mut self.animator, 0.0, reference)
    }

    pub fn resize(&mut self, surface: Surface) {
        self.camera.resize(surface);
    }

    pub fn dispose(&mut self, backend: &mut dyn RenderBackend) -> Teardown {
        if self.disposed {
            return Teardown::default();
        }
        self.disposed = true;
        self.project = None;
        self.video = None;
        self.placeholder = None;
        self.pending = None;
        let teardown = Teardown {
            tweens: self.animator.kill_owner(self.owner),
            resources: self.scope.release_all(backend),
        };
        self.graph.clear();
        info!(
            tweens = teardown.tweens,
            resources = teardown.resources,
            "showcase scene disposed"
        );
        teardown
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn fog_color(&self) -> Option<Hsl> {
        self.graph.fog.map(|f| f.color)
    }

    pub fn project_node(&self) -> Option<NodeId> {
        self.project_mesh_node()
    }

    pub fn video_node(&self) -> Option<NodeId> {
        self.video.as_ref().map(|v| v.node)
    }

    pub fn has_placeholder(&self) -> bool {
        self.placeholder.is_some()
    }

    pub fn is_swapping(&self) -> bool {
        self.pending.is_some()
    }

    pub fn live_tweens(&self) -> usize {
        self.animator.live_handles()
    }

    pub fn live_resources(&self) -> usize {
        self.scope.len()
    }
}

impl Drop for ShowcaseScene {
    fn drop(&mut self) {
        if !self.disposed {
            warn!("showcase scene dropped without dispose");
        }
    }
}
