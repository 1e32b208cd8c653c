//! Runs navigator effects against the 3D showcase and the page overlay.

use prism_common::{Color, Rect, SceneError};
use prism_config::schema::ShowcaseConfig;
use prism_config::PrismConfig;
use prism_motion::{OwnerId, RevealTrigger, TweenHandle, TweenSpec};
use prism_scene::palette::random_hue;
use prism_scene::{hover_accent, HoverAccent, RenderBackend, SceneEvent, ShowcaseScene, Surface, Teardown};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::content::Content;
use crate::entrance::{entrance, mount_reveal};
use crate::lightbox::Lightbox;
use crate::navigator::{NavEffect, NavInput, NavState, Navigator, SelectMode, Step};
use crate::source::{GradientSource, TextureSource};
use crate::stage::{Element, ElementId, ElementProp, Overlay, StageEvent};

/// Texture crossfade out and back in.
const IMAGE_SETTLE: f32 = 0.5;

/// One grid item per project, showing its first image.
fn build_grid(content: &Content, alpha: f32, overlay: &mut Overlay) -> Vec<ElementId> {
    content
        .projects
        .iter()
        .map(|p| {
            let mut item = Element::new(p.title.as_str()).with_alpha(alpha);
            item.source = p.images.first().cloned();
            overlay.stage.add(item)
        })
        .collect()
}

pub struct ShowcaseController {
    config: ShowcaseConfig,
    angle: f64,
    seed: Color,
    content: Content,
    navigator: Navigator,
    scene: ShowcaseScene,
    source: Box<dyn TextureSource>,
    rng: StdRng,
    owner: OwnerId,
    viewport: Surface,
    container: ElementId,
    canvas: ElementId,
    grid: Vec<ElementId>,
    detail: Vec<ElementId>,
    accent: Color,
    highlight: Option<(usize, HoverAccent)>,
    lightbox: Option<Lightbox>,
    /// Pending completion of the running transition.
    settle: Option<TweenHandle>,
    reveal: RevealTrigger,
    disposed: bool,
}

impl ShowcaseController {
    pub fn new(
        config: &PrismConfig,
        content: Content,
        seed: Color,
        surface: Surface,
        backend: &mut dyn RenderBackend,
        overlay: &mut Overlay,
        rng_seed: u64,
    ) -> Result<Self, SceneError> {
        let scene = ShowcaseScene::new(config, surface, seed, backend, rng_seed)?;
        let showcase = config.showcase.clone();
        let owner = overlay.animator.new_owner();

        let container = overlay.stage.add(Element::new("showcase").with_alpha(0.0));
        let canvas = overlay
            .stage
            .add(Element::new("showcase-canvas").with_alpha(0.0));
        let grid = build_grid(&content, 0.0, overlay);

        info!(projects = content.projects.len(), "showcase ready");
        Ok(Self {
            navigator: Navigator::new(content.image_counts()),
            source: Box::new(GradientSource::new(
                showcase.scene.texture_size,
                seed,
                rng_seed.wrapping_add(1),
            )),
            reveal: RevealTrigger::new(config.motion.reveal_threshold),
            config: showcase,
            angle: config.palette.gradient_angle,
            seed,
            content,
            scene,
            rng: StdRng::seed_from_u64(rng_seed),
            owner,
            viewport: surface,
            container,
            canvas,
            grid,
            detail: Vec::new(),
            accent: seed,
            highlight: None,
            lightbox: None,
            settle: None,
            disposed: false,
        })
    }

    pub fn with_source(mut self, source: Box<dyn TextureSource>) -> Self {
        self.source = source;
        self
    }

    /// Touch input and narrow viewports select in two steps.
    pub fn select_mode(&self, touch: bool) -> SelectMode {
        if touch || (self.viewport.width as f64) < self.config.narrow_viewport {
            SelectMode::TwoStep
        } else {
            SelectMode::Direct
        }
    }

    pub fn select(
        &mut self,
        index: usize,
        touch: bool,
        backend: &mut dyn RenderBackend,
        overlay: &mut Overlay,
    ) -> Result<(), SceneError> {
        let mode = self.select_mode(touch);
        self.input(NavInput::Select { index, mode }, backend, overlay)
    }

    pub fn input(
        &mut self,
        input: NavInput,
        backend: &mut dyn RenderBackend,
        overlay: &mut Overlay,
    ) -> Result<(), SceneError> {
        if self.disposed {
            return Ok(());
        }
        let effects = self.navigator.apply(input);
        self.run_all(effects, backend, overlay)
    }

    /// Run every effect even if one fails, then report the first failure.
    /// A failed transition that armed no completion is released so the
    /// navigator keeps accepting input.
    fn run_all(
        &mut self,
        effects: Vec<NavEffect>,
        backend: &mut dyn RenderBackend,
        overlay: &mut Overlay,
    ) -> Result<(), SceneError> {
        let mut failed = None;
        for effect in effects {
            if let Err(e) = self.run(effect, backend, overlay) {
                warn!(error = %e, "showcase effect failed");
                if failed.is_none() {
                    failed = Some(e);
                }
            }
        }
        let Some(e) = failed else {
            return Ok(());
        };
        let stuck = matches!(self.navigator.state(), NavState::DetailTransitioning { .. });
        if stuck && self.settle.is_none() {
            self.navigator.apply(NavInput::TransitionDone);
        }
        Err(e)
    }

    fn run(
        &mut self,
        effect: NavEffect,
        backend: &mut dyn RenderBackend,
        overlay: &mut Overlay,
    ) -> Result<(), SceneError> {
        debug!(?effect, "showcase effect");
        match effect {
            NavEffect::Highlight(index) => {
                let accent = hover_accent(self.seed, self.angle, &mut self.rng);
                if let Some(item) = self.grid.get(index).and_then(|id| overlay.stage.get_mut(*id)) {
                    item.background = Some(accent.background.clone());
                }
                self.highlight = Some((index, accent));
            }
            NavEffect::ShowProject(project) => {
                self.rebuild_detail(project, overlay);
                let shown = self.show_image(project, 0, backend);
                self.pick_video(project, backend);
                overlay.animator.kill_matching(|(id, _)| *id == self.canvas);
                overlay.animator.add(
                    self.owner,
                    TweenSpec::new(0.5)
                        .to((self.canvas, ElementProp::Alpha), 1.0)
                        .delay(0.3),
                );
                shown?;
            }
            NavEffect::ShowImage { project, image } => {
                let shown = self.show_image(project, image, backend);
                if self.navigator.state().is_in_flight() {
                    self.arm_settle(IMAGE_SETTLE, StageEvent::ImageSettled, overlay);
                }
                shown?;
            }
            NavEffect::RecolorAccent => {
                self.accent = random_hue(self.seed, &mut self.rng).to_color();
            }
            NavEffect::ReplayEntrance => {
                let sequence = entrance(&self.detail, &self.config.entrance);
                let done_at = sequence.duration();
                overlay.animator.play(self.owner, sequence);
                self.arm_settle(done_at, StageEvent::EntranceDone, overlay);
            }
            NavEffect::ShowGrid => {
                self.close_lightbox(overlay);
                self.clear_detail(overlay);
                self.scene.clear_video(backend);
                if let Some(handle) = self.settle.take() {
                    overlay.animator.kill(handle);
                }
                overlay.animator.kill_matching(|(id, _)| *id == self.canvas);
                if let Some(canvas) = overlay.stage.get_mut(self.canvas) {
                    canvas.alpha = 0.0;
                }
            }
            NavEffect::OpenLightbox { project, image } => {
                self.close_lightbox(overlay);
                if let Some(url) = self.image_url(project, image) {
                    self.lightbox = Some(Lightbox::open(&url, &self.config.lightbox, overlay));
                }
            }
            NavEffect::CrossfadeLightbox {
                project,
                image,
                step,
            } => self.crossfade(project, image, step, overlay),
            NavEffect::CloseLightbox => self.close_lightbox(overlay),
        }
        Ok(())
    }

    fn crossfade(&mut self, project: usize, image: usize, step: Step, overlay: &mut Overlay) {
        let url = self.image_url(project, image);
        match (self.lightbox.as_mut(), url) {
            (Some(lightbox), Some(url)) => {
                lightbox.crossfade(&url, step, overlay);
            }
            _ => {
                warn!(project, image, "lightbox crossfade without a lightbox");
                self.navigator.apply(NavInput::TransitionDone);
            }
        }
    }

    fn image_url(&self, project: usize, image: usize) -> Option<String> {
        self.content.projects.get(project)?.images.get(image).cloned()
    }

    /// Schedule the navigator's completion, replacing any pending one.
    fn arm_settle(&mut self, delay: f32, event: StageEvent, overlay: &mut Overlay) {
        if let Some(old) = self.settle.take() {
            overlay.animator.kill(old);
        }
        self.settle = Some(overlay.animator.delayed_call(self.owner, delay, event));
    }

    fn show_image(
        &mut self,
        project: usize,
        image: usize,
        backend: &mut dyn RenderBackend,
    ) -> Result<(), SceneError> {
        let Some(url) = self.image_url(project, image) else {
            return Ok(());
        };
        match self.source.load(&url) {
            Ok(bitmap) => self.scene.show_texture(bitmap, backend),
            Err(e) => {
                warn!(error = %e, %url, "texture unavailable");
                Ok(())
            }
        }
    }

    /// A random video of the project on wide viewports, none otherwise.
    fn pick_video(&mut self, project: usize, backend: &mut dyn RenderBackend) {
        let wide = self.viewport.width as f64 > self.config.video_min_width;
        let video = self
            .content
            .projects
            .get(project)
            .filter(|_| wide)
            .and_then(|p| p.videos.choose(&mut self.rng))
            .cloned();
        let Some(url) = video else {
            self.scene.clear_video(backend);
            return;
        };
        if let Err(e) = self.scene.show_video(&url, backend) {
            warn!(error = %e, %url, "video unavailable");
            self.scene.clear_video(backend);
        }
    }

    fn rebuild_detail(&mut self, project: usize, overlay: &mut Overlay) {
        self.clear_detail(overlay);
        let Some(p) = self.content.projects.get(project) else {
            return;
        };
        let stage = &mut overlay.stage;
        self.detail.push(stage.add(Element::new("project-text").with_alpha(0.0)));
        for tool in &p.tools {
            self.detail
                .push(stage.add(Element::new(tool.as_str()).with_alpha(0.0)));
        }
        for url in &p.images {
            self.detail.push(stage.add(
                Element::new("thumbnail")
                    .with_alpha(0.0)
                    .with_source(url.as_str()),
            ));
        }
    }

    fn clear_detail(&mut self, overlay: &mut Overlay) {
        for id in self.detail.drain(..) {
            overlay.discard(id);
        }
    }

    fn close_lightbox(&mut self, overlay: &mut Overlay) {
        if let Some(lightbox) = self.lightbox.take() {
            lightbox.close(overlay);
        }
    }

    /// Route an overlay event. Returns `true` if it belonged here.
    pub fn handle(&mut self, event: StageEvent) -> bool {
        match event {
            StageEvent::EntranceDone | StageEvent::ImageSettled => {
                self.settle = None;
                self.navigator.apply(NavInput::TransitionDone);
                true
            }
            StageEvent::LightboxSettled => {
                self.navigator.apply(NavInput::TransitionDone);
                true
            }
            _ => false,
        }
    }

    /// Swap in new content, keeping the view on a valid project and image.
    pub fn replace_content(
        &mut self,
        content: Content,
        backend: &mut dyn RenderBackend,
        overlay: &mut Overlay,
    ) -> Result<(), SceneError> {
        let counts = content.image_counts();
        self.content = content;
        for id in self.grid.drain(..) {
            overlay.discard(id);
        }
        let alpha = if self.reveal.is_armed() { 0.0 } else { 1.0 };
        self.grid = build_grid(&self.content, alpha, overlay);
        self.highlight = None;

        let effects = self.navigator.apply(NavInput::ContentReplaced(counts));
        self.run_all(effects, backend, overlay)?;
        let state = self.navigator.state();
        if let (Some(project), Some(image)) = (state.project(), state.image()) {
            self.rebuild_detail(project, overlay);
            for &id in &self.detail {
                if let Some(item) = overlay.stage.get_mut(id) {
                    item.alpha = 1.0;
                }
            }
            self.show_image(project, image, backend)?;
            if let (Some(lightbox), Some(url)) = (self.lightbox.as_ref(), self.image_url(project, image)) {
                if let Some(front) = overlay.stage.get_mut(lightbox.front()) {
                    front.source = Some(url);
                }
            }
        }
        info!(projects = self.content.projects.len(), "showcase content replaced");
        Ok(())
    }

    /// Advance the 3D scene one frame.
    pub fn tick(&mut self, dt: f32, backend: &mut dyn RenderBackend) -> Result<Vec<SceneEvent>, SceneError> {
        self.scene.tick(dt, backend)
    }

    /// `rect` is the section's bounding box. The first time it comes into
    /// view the grid reveals itself.
    pub fn on_scroll(&mut self, rect: Option<&Rect>, viewport_height: f64, overlay: &mut Overlay) -> bool {
        if self.reveal.check(rect, viewport_height) {
            overlay
                .animator
                .play(self.owner, mount_reveal(self.container, &self.grid));
            debug!("showcase revealed");
        }
        self.scene.on_scroll(rect)
    }

    pub fn on_video_ready(&mut self) {
        self.scene.on_video_ready();
    }

    pub fn resize(&mut self, surface: Surface) {
        self.viewport = surface;
        self.scene.resize(surface);
    }

    pub fn dispose(&mut self, backend: &mut dyn RenderBackend, overlay: &mut Overlay) -> Teardown {
        if self.disposed {
            return Teardown::default();
        }
        self.disposed = true;
        self.close_lightbox(overlay);
        let tweens = overlay.animator.kill_owner(self.owner);
        for id in self
            .detail
            .drain(..)
            .chain(self.grid.drain(..))
            .chain([self.container, self.canvas])
        {
            overlay.discard(id);
        }
        self.settle = None;
        let scene = self.scene.dispose(backend);
        Teardown {
            tweens: tweens + scene.tweens,
            resources: scene.resources,
        }
    }

    pub fn state(&self) -> NavState {
        self.navigator.state()
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn scene(&self) -> &ShowcaseScene {
        &self.scene
    }

    /// Border accent of the detail view.
    pub fn accent(&self) -> Color {
        self.accent
    }

    pub fn highlight(&self) -> Option<&(usize, HoverAccent)> {
        self.highlight.as_ref()
    }

    pub fn grid_items(&self) -> &[ElementId] {
        &self.grid
    }

    pub fn detail_items(&self) -> &[ElementId] {
        &self.detail
    }

    pub fn container(&self) -> ElementId {
        self.container
    }

    pub fn canvas(&self) -> ElementId {
        self.canvas
    }

    pub fn lightbox(&self) -> Option<&Lightbox> {
        self.lightbox.as_ref()
    }

    pub fn live_tweens(&self, overlay: &Overlay) -> usize {
        overlay.animator.live_for(self.owner) + self.scene.live_tweens()
    }

    pub fn live_resources(&self) -> usize {
        self.scene.live_resources()
    }
}

#[cfg(test)]
mod tests;
