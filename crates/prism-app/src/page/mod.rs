//! The whole portfolio page, driven headless.
//!
//! Owns the header scene, the project showcase, the skill bars and the
//! gradient backdrop, feeds them frames and scripted input, and tears
//! everything down at the end so leaks show up in the report.

pub mod script;

use std::path::{Path, PathBuf};
use std::time::Duration;

use prism_common::{Color, PrismError, Rect, SceneError};
use prism_config::colors::parse_color;
use prism_config::PrismConfig;
use prism_motion::FrameClock;
use prism_scene::{
    DeviceSignals, HeadlessBackend, HeaderScene, Palette, RenderBackend, RenderProfile, Surface,
    Teardown, Tier,
};
use prism_showcase::{
    load_content, Content, FileSource, GradientBackdrop, NavState, Overlay, ShowcaseController,
    ShowcaseStatus, Skill, SkillBoard, TextureSource,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use self::script::{Action, Script};

/// Colors in the header palette before the random extras.
const HEADER_COLORS: usize = 3;
const HEADER_MAX_EXTRA: f64 = 3.0;

/// Seconds of idle page after the last scripted cue.
const TAIL: f32 = 2.0;

/// Evenly spaced header palette: three colors, and half the time up to
/// three more.
pub fn header_palette(seed: Color, rng: &mut impl Rng) -> Result<Palette, SceneError> {
    let mut count = HEADER_COLORS;
    if rng.gen::<f64>() > 0.5 {
        count += (rng.gen::<f64>() * HEADER_MAX_EXTRA).round() as usize;
    }
    Palette::evenly_spaced(seed, count, rng)
}

/// Document-space boxes of the page sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub header: Rect,
    pub skills: Rect,
    pub showcase: Rect,
}

impl Layout {
    pub fn new(surface: Surface) -> Self {
        let width = surface.width as f64;
        let height = surface.height as f64;
        let header = Rect::new(0.0, 0.0, width, height);
        let skills = Rect::new(0.0, header.bottom() + height * 0.1, width, 400.0);
        let showcase = Rect::new(0.0, skills.bottom() + 100.0, width, height);
        Self {
            header,
            skills,
            showcase,
        }
    }

    /// `rect` as the browser reports it with the page scrolled by `scroll_y`.
    pub fn client_rect(rect: &Rect, scroll_y: f64) -> Rect {
        Rect::new(rect.x, rect.y - scroll_y, rect.width, rect.height)
    }
}

/// Everything a session needs besides the config.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub content_dir: PathBuf,
    pub seed: u64,
    pub signals: DeviceSignals,
    pub surface: Surface,
}

/// Whatever teardown could not account for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Leaks {
    pub resources: usize,
    pub tweens: usize,
    pub elements: usize,
}

impl Leaks {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub frames: u32,
    pub seconds: f32,
    pub fps: f64,
    pub tier: Tier,
    pub offline: bool,
    pub backdrop_redraws: u32,
    pub final_state: Option<NavState>,
    pub released: Teardown,
    pub leaks: Leaks,
}

pub struct Page {
    backend: HeadlessBackend,
    overlay: Overlay,
    header: HeaderScene,
    showcase: Option<ShowcaseController>,
    skills: Option<SkillBoard>,
    backdrop: GradientBackdrop,
    profile: RenderProfile,
    layout: Layout,
    surface: Surface,
    scroll_y: f64,
    offline: bool,
    disposed: bool,
}

/// Real image files if the content ships them, gradients otherwise.
fn texture_source(dir: &Path, content: &Content) -> Option<Box<dyn TextureSource>> {
    let first = content.projects.first()?.images.first()?;
    if dir.join(first.trim_start_matches('/')).is_file() {
        Some(Box::new(FileSource::new(dir)))
    } else {
        None
    }
}

impl Page {
    pub fn build(config: &PrismConfig, options: &PageOptions) -> Result<Self, PrismError> {
        let seed = parse_color(&config.palette.seed)?;
        let angle = config.palette.gradient_angle;
        let mut rng = StdRng::seed_from_u64(options.seed);
        let mut backend = HeadlessBackend::new();
        let mut overlay = Overlay::new();

        let profile = RenderProfile::resolve(&config.performance, &options.signals);
        let palette = header_palette(seed, &mut rng)?;
        let mut header = HeaderScene::compose(
            config,
            &profile,
            palette,
            options.surface,
            &mut backend,
            &mut rng,
        )?;

        let status = ShowcaseStatus::from_load(load_content(&options.content_dir));
        let offline = status.message().is_some();
        if let Some(message) = status.message() {
            warn!(dir = %options.content_dir.display(), message, "showcase unavailable");
        }

        let built = (|| -> Result<_, SceneError> {
            let backdrop = GradientBackdrop::start(
                &config.palette.backdrop,
                seed,
                angle,
                &mut overlay,
                options.seed.wrapping_add(2),
            )?;
            let ShowcaseStatus::Ready(mut content) = status else {
                return Ok((backdrop, None, None));
            };
            if config.showcase.shuffle {
                content.shuffle_projects(&mut rng);
            }
            let skills: Vec<&Skill> = content.all_skills().collect();
            let board = SkillBoard::new(
                &skills,
                seed,
                angle,
                config.motion.reveal_threshold,
                &mut overlay,
                &mut rng,
            )?;
            let source = texture_source(&options.content_dir, &content);
            let mut showcase = ShowcaseController::new(
                config,
                content,
                seed,
                options.surface,
                &mut backend,
                &mut overlay,
                options.seed.wrapping_add(1),
            )?;
            if let Some(source) = source {
                debug!("project textures read from disk");
                showcase = showcase.with_source(source);
            }
            Ok((backdrop, Some(board), Some(showcase)))
        })();

        let (backdrop, skills, showcase) = match built {
            Ok(parts) => parts,
            Err(e) => {
                header.dispose(&mut backend);
                return Err(e.into());
            }
        };

        info!(
            tier = %profile.tier,
            width = options.surface.width,
            height = options.surface.height,
            offline,
            "page built"
        );
        Ok(Self {
            backend,
            overlay,
            header,
            showcase,
            skills,
            backdrop,
            profile,
            layout: Layout::new(options.surface),
            surface: options.surface,
            scroll_y: 0.0,
            offline,
            disposed: false,
        })
    }

    /// Advance every animator by `dt` seconds and route completion events.
    pub fn frame(&mut self, dt: f32) -> Result<(), PrismError> {
        self.header.tick(dt);
        if let Some(showcase) = self.showcase.as_mut() {
            showcase.tick(dt, &mut self.backend)?;
        }
        for event in self.overlay.tick(dt) {
            if self.backdrop.handle(event, &mut self.overlay)? {
                continue;
            }
            if self.showcase.as_mut().is_some_and(|s| s.handle(event)) {
                continue;
            }
            debug!(?event, "unrouted overlay event");
        }
        Ok(())
    }

    pub fn scroll(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y.max(0.0);
        let viewport_height = self.surface.height as f64;
        let header = Layout::client_rect(&self.layout.header, self.scroll_y);
        self.header.on_scroll(self.scroll_y, Some(&header));
        if let Some(skills) = self.skills.as_mut() {
            let rect = Layout::client_rect(&self.layout.skills, self.scroll_y);
            if skills.on_scroll(Some(&rect), viewport_height, &mut self.overlay) {
                debug!(scroll_y = self.scroll_y, "skills revealed");
            }
        }
        if let Some(showcase) = self.showcase.as_mut() {
            let rect = Layout::client_rect(&self.layout.showcase, self.scroll_y);
            showcase.on_scroll(Some(&rect), viewport_height, &mut self.overlay);
        }
    }

    pub fn resize(&mut self, surface: Surface) {
        self.surface = surface;
        self.layout = Layout::new(surface);
        self.header.resize(surface);
        if let Some(showcase) = self.showcase.as_mut() {
            showcase.resize(surface);
        }
    }

    pub fn apply(&mut self, action: Action) -> Result<(), PrismError> {
        debug!(?action, "page input");
        match action {
            Action::Scroll(y) => self.scroll(y),
            Action::HoverSkill(index) => {
                if let Some(skills) = self.skills.as_mut() {
                    skills.hover(index, &mut self.overlay);
                }
            }
            Action::Select { index, touch } => {
                if let Some(showcase) = self.showcase.as_mut() {
                    if let Err(e) = showcase.select(index, touch, &mut self.backend, &mut self.overlay) {
                        warn!(error = %e, index, "project selection incomplete");
                    }
                }
            }
            Action::Nav(input) => {
                if let Some(showcase) = self.showcase.as_mut() {
                    if let Err(e) = showcase.input(input, &mut self.backend, &mut self.overlay) {
                        warn!(error = %e, "showcase input incomplete");
                    }
                }
            }
            Action::VideoReady => {
                if let Some(showcase) = self.showcase.as_mut() {
                    showcase.on_video_ready();
                }
            }
            Action::Resize { width, height } => {
                match Surface::new(width, height, self.surface.pixel_ratio) {
                    Ok(surface) => self.resize(surface),
                    Err(e) => debug!(error = %e, "collapsed viewport ignored"),
                }
            }
        }
        Ok(())
    }

    /// Dispose every component. Idempotent.
    pub fn teardown(&mut self) -> Teardown {
        if self.disposed {
            return Teardown::default();
        }
        self.disposed = true;
        let mut released = self.header.dispose(&mut self.backend);
        if let Some(showcase) = self.showcase.as_mut() {
            let t = showcase.dispose(&mut self.backend, &mut self.overlay);
            released.tweens += t.tweens;
            released.resources += t.resources;
        }
        if let Some(skills) = self.skills.as_mut() {
            released.tweens += skills.dispose(&mut self.overlay);
        }
        released.tweens += self.backdrop.dispose(&mut self.overlay);
        info!(
            tweens = released.tweens,
            resources = released.resources,
            "page torn down"
        );
        released
    }

    pub fn leaks(&self) -> Leaks {
        let leaks = Leaks {
            resources: self.backend.live_resources(),
            tweens: self.overlay.live_tweens()
                + self.header.live_tweens()
                + self.showcase.as_ref().map_or(0, |s| s.scene().live_tweens()),
            elements: self.overlay.stage.len(),
        };
        if !leaks.is_clean() {
            warn!(?leaks, "page leaked after teardown");
        }
        leaks
    }

    pub fn profile(&self) -> &RenderProfile {
        &self.profile
    }

    pub fn is_offline(&self) -> bool {
        self.offline
    }

    pub fn showcase(&self) -> Option<&ShowcaseController> {
        self.showcase.as_ref()
    }

    pub fn backdrop(&self) -> &GradientBackdrop {
        &self.backdrop
    }
}

fn millis(ms: f64) -> Duration {
    Duration::from_secs_f64(ms.max(0.0) / 1000.0)
}

/// Build the page, play `script` at the configured frame rate for `frames`
/// frames (or until shortly after the last cue) and tear it down.
pub fn run(
    config: &PrismConfig,
    options: &PageOptions,
    mut script: Script,
    frames: Option<u32>,
) -> Result<Report, PrismError> {
    let mut page = Page::build(config, options)?;
    let frame_rate = config.performance.frame_rate.max(1);
    let total = frames.unwrap_or_else(|| ((script.end() + TAIL) * frame_rate as f32).ceil() as u32);

    let mut clock = FrameClock::new(
        millis(config.motion.lag_threshold_ms),
        millis(config.motion.lag_step_ms),
    );
    let step = Duration::from_secs_f64(1.0 / frame_rate as f64);
    let interval = config.logging.fps_report_interval;
    info!(frames = total, frame_rate, "session started");

    let mut seconds = 0.0;
    let driven = (|| -> Result<(), PrismError> {
        for frame in 1..=total {
            let dt = clock.advance(step);
            seconds += dt;
            for action in script.due(seconds) {
                page.apply(action)?;
            }
            page.frame(dt)?;
            if interval > 0 && frame % interval == 0 {
                info!(
                    frame,
                    fps = %format!("{:.1}", clock.fps()),
                    frame_ms = %format!("{:.2}", clock.frame_time_ms()),
                    "frame stats"
                );
            }
        }
        Ok(())
    })();

    let final_state = page.showcase().map(|s| s.state());
    let released = page.teardown();
    let leaks = page.leaks();
    driven?;

    Ok(Report {
        frames: total,
        seconds,
        fps: clock.fps(),
        tier: page.profile().tier,
        offline: page.is_offline(),
        backdrop_redraws: page.backdrop().redraws(),
        final_state,
        released,
        leaks,
    })
}

#[cfg(test)]
mod tests;
