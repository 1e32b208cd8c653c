//! Header scene composition.
//!
//! [`HeaderScene::compose`] builds the whole header: camera, lights, fog,
//! wireframe box, shape swarms, bright cluster and particle fields, plus
//! the tweens that animate them. Every resource goes through one
//! [`ResourceScope`] and every tween through one owner, so a failed build
//! or a [`HeaderScene::dispose`] leaves nothing behind.

mod bright_cluster;
mod particle_field;
mod shape_swarm;
mod wireframe_box;


use std::str::FromStr;

use prism_common::{Color, Rect, SceneError, Vec3};
use prism_config::PrismConfig;
use prism_motion::{Animator, Ease, OwnerId, Repeat, ScrollBinder, ScrollMode, TweenSpec};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::camera::{PerspectiveCamera, Surface};
use crate::effects::PostEffects;
use crate::events::SceneEvent;
use crate::graph::{Fog, Light, Node, NodeId, NodeKey, NodeKind, NodeProp, SceneGraph};
use crate::palette::Palette;
use crate::resources::{RenderBackend, ResourceScope};
use crate::tier::RenderProfile;

pub type SceneAnimator = Animator<NodeKey, SceneEvent>;

/// Shared state threaded through the group builders.
pub(crate) struct Build<'a> {
    pub graph: &'a mut SceneGraph,
    pub animator: &'a mut SceneAnimator,
    pub backend: &'a mut dyn RenderBackend,
    pub scope: &'a mut ResourceScope,
    pub rng: &'a mut StdRng,
    pub owner: OwnerId,
    pub seed: Color,
    /// Nodes turned toward their parent's origin every frame.
    pub trackers: Vec<NodeId>,
}

impl Build<'_> {
    pub fn tween(&mut self, spec: TweenSpec<NodeKey, SceneEvent>) {
        self.animator.add(self.owner, spec);
    }

    /// Uniform value in `[-extent, extent]`.
    pub fn spread(&mut self, extent: f32) -> f32 {
        -extent + self.rng.gen::<f32>() * 2.0 * extent
    }

    pub fn random_rotation(&mut self) -> Vec3 {
        Vec3::new(
            self.rng.gen::<f32>() * std::f32::consts::PI,
            self.rng.gen::<f32>() * std::f32::consts::PI,
            self.rng.gen::<f32>() * std::f32::consts::PI,
        )
    }

    /// Endless linear rotation about one axis.
    pub fn spin(&mut self, node: NodeId, axis: NodeProp, to: f32, duration: f32) {
        self.tween(
            TweenSpec::new(duration)
                .to((node, axis), to)
                .ease(Ease::Linear)
                .repeat(Repeat::Infinite),
        );
    }

    /// Endless back-and-forth uniform scale to `1..3` over 30–50 s.
    pub fn breathe(&mut self, keys: &[NodeKey]) {
        let to = 1.0 + self.rng.gen::<f32>() * 2.0;
        let duration = 30.0 + self.rng.gen::<f32>() * 20.0;
        let mut spec = TweenSpec::new(duration)
            .ease(Ease::back(prism_motion::Direction::InOut))
            .yoyo(true)
            .repeat(Repeat::Infinite);
        for key in keys {
            spec = spec.to(*key, to);
        }
        self.tween(spec);
    }
}

fn check_container(what: &str, container: [f32; 3]) -> Result<(), SceneError> {
    if container.iter().all(|v| v.is_finite() && *v > 0.0) {
        Ok(())
    } else {
        Err(SceneError::InvalidBounds(format!("{what} container {container:?}")))
    }
}

/// Resources and tweens released by a teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Teardown {
    pub tweens: usize,
    pub resources: usize,
}

/// The animated 3D header.
pub struct HeaderScene {
    graph: SceneGraph,
    animator: SceneAnimator,
    scope: ResourceScope,
    owner: OwnerId,
    camera: PerspectiveCamera,
    effects: PostEffects,
    palette: Palette,
    root: NodeId,
    scroll: ScrollBinder<NodeKey>,
    trackers: Vec<NodeId>,
    particle_fields: usize,
    revealed: bool,
    disposed: bool,
}

impl HeaderScene {
    /// Build the header scene for `surface`.
    ///
    /// On error everything acquired so far is released before returning.
    pub fn compose(
        config: &PrismConfig,
        profile: &RenderProfile,
        palette: Palette,
        surface: Surface,
        backend: &mut dyn RenderBackend,
        rng: &mut StdRng,
    ) -> Result<Self, SceneError> {
        let scene = &config.scene;
        for swarm in &scene.swarms {
            check_container("swarm", swarm.container)?;
        }
        check_container("small particle", scene.particles.small.container)?;
        check_container("large particle", scene.particles.large.container)?;

        let mut graph = SceneGraph::new();
        let mut animator = SceneAnimator::new();
        let owner = animator.new_owner();
        let mut scope = ResourceScope::new("header");

        let middle = palette.middle();
        graph.fog = Some(Fog {
            color: middle,
            near: scene.fog.near,
            far: scene.fog.far,
        });

        let camera_node = graph.add(
            None,
            Node::new("camera", NodeKind::Camera).at(Vec3::from(scene.camera.position)),
        );
        let camera = PerspectiveCamera::new(camera_node, &scene.camera, surface);

        graph.add(
            None,
            Node::new(
                "ambient",
                NodeKind::Light(Light::Ambient {
                    color: Color::from_u32(0xfafafa),
                    intensity: 1.0,
                }),
            ),
        );
        graph.add(
            None,
            Node::new(
                "key-light",
                NodeKind::Light(Light::Directional {
                    color: middle.to_color(),
                    intensity: 0.5,
                }),
            ),
        );

        let reveal = &scene.reveal;
        let root = graph.add(
            None,
            Node::group("header")
                .scaled(Vec3::splat(reveal.initial_scale))
                .hidden(),
        );

        let mut build = Build {
            graph: &mut graph,
            animator: &mut animator,
            backend: &mut *backend,
            scope: &mut scope,
            rng,
            owner,
            seed: palette.seed(),
            trackers: Vec::new(),
        };
        let built = Self::build_groups(&mut build, root, config, profile, surface);
        let trackers = std::mem::take(&mut build.trackers);
        let particle_fields = match built {
            Ok(fields) => fields,
            Err(e) => {
                let released = scope.release_all(backend);
                let killed = animator.kill_owner(owner);
                warn!(error = %e, released, killed, "header composition failed");
                return Err(e);
            }
        };

        animator.add(
            owner,
            TweenSpec::new(0.0)
                .to((root, NodeProp::Visible), 1.0)
                .delay(reveal.show_delay),
        );
        let mut grow = TweenSpec::new(reveal.scale_duration)
            .ease(Ease::back(prism_motion::Direction::Out))
            .delay(reveal.scale_delay)
            .on_complete(SceneEvent::Revealed);
        for prop in NodeProp::SCALE {
            grow = grow.to((root, prop), 1.0);
        }
        animator.add(owner, grow);

        let scroll_cfg = &config.motion.scroll;
        let ease = Ease::from_str(&scroll_cfg.ease).unwrap_or(Ease::QUAD_OUT);
        let scroll = ScrollBinder::new(owner, ScrollMode::ScrollRelative, scroll_cfg.damping, ease)
            .bind((camera_node, NodeProp::PositionY), scroll_cfg.camera_factor)
            .bind((root, NodeProp::RotationY), scroll_cfg.rotation_factor);

        let effects = PostEffects::from_profile(profile, &config.effects);
        info!(
            nodes = graph.len(),
            resources = scope.len(),
            tweens = animator.live_handles(),
            particle_fields,
            tier = %profile.tier,
            "header scene composed"
        );

        Ok(Self {
            graph,
            animator,
            scope,
            owner,
            camera,
            effects,
            palette,
            root,
            scroll,
            trackers,
            particle_fields,
            revealed: false,
            disposed: false,
        })
    }

    fn build_groups(
        build: &mut Build<'_>,
        root: NodeId,
        config: &PrismConfig,
        profile: &RenderProfile,
        surface: Surface,
    ) -> Result<usize, SceneError> {
        let scene = &config.scene;
        wireframe_box::build(build, root, &scene.wireframe)?;
        for swarm in &scene.swarms {
            shape_swarm::build(build, root, swarm)?;
        }
        bright_cluster::build(build, root, &scene.cluster, surface.width)?;
        particle_field::build(build, root, &scene.particles, profile.budget)
    }

    /// Advance one frame. Returns the events that fired.
    pub fn tick(&mut self, dt: f32) -> Vec<SceneEvent> {
        let events = self.animator.tick(dt, &mut self.graph);
        for id in &self.trackers {
            self.graph.look_at(*id, Vec3::ZERO);
        }
        for event in &events {
            if *event == SceneEvent::Revealed {
                self.revealed = true;
                debug!("header reveal finished");
            }
        }
        events
    }

    /// Damp the camera and group toward the new scroll offset.
    /// `reference` is the header's bounding box; `None` is a no-op.
    pub fn on_scroll(&mut self, scroll_y: f64, reference: Option<&Rect>) -> bool {
        self.scroll.on_scroll(&mut self.animator, scroll_y, reference)
    }

    pub fn resize(&mut self, surface: Surface) {
        self.camera.resize(surface);
        debug!(
            width = surface.width,
            height = surface.height,
            "header surface resized"
        );
    }

    /// Cancel every tween and release every resource. Idempotent.
    pub fn dispose(&mut self, backend: &mut dyn RenderBackend) -> Teardown {
        if self.disposed {
            return Teardown::default();
        }
        self.disposed = true;
        let teardown = Teardown {
            tweens: self.animator.kill_owner(self.owner),
            resources: self.scope.release_all(backend),
        };
        self.graph.clear();
        self.trackers.clear();
        info!(
            tweens = teardown.tweens,
            resources = teardown.resources,
            "header scene disposed"
        );
        teardown
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn effects(&self) -> &PostEffects {
        &self.effects
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn particle_fields(&self) -> usize {
        self.particle_fields
    }

    pub fn live_tweens(&self) -> usize {
        self.animator.live_handles()
    }

    pub fn live_resources(&self) -> usize {
        self.scope.len()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Drop for HeaderScene {
    fn drop(&mut self) {
        if !self.disposed {
            warn!("header scene dropped without dispose");
        }
    }
}
