use prism_scene::resources::ResourceKind;
use prism_scene::HeadlessBackend;

use super::*;
use crate::source::FileSource;

const PROFILE: &str = r#"{"name": "Ada", "headline": "motion engineer"}"#;
const SKILLS: &str = r#"[{"category": "Web", "skills": [{"title": "CSS", "level": 9}]}]"#;
const PROJECTS: &str = r#"[
    {"title": "One", "tools": ["gsap", "three"], "images": ["1a.png", "1b.png"], "videos": ["one.mp4"]},
    {"title": "Two", "images": ["2a.png"]},
    {"title": "Three", "tools": ["glsl"], "images": ["3a.png", "3b.png", "3c.png"]}
]"#;

struct Harness {
    backend: HeadlessBackend,
    overlay: Overlay,
    ctl: ShowcaseController,
}

impl Harness {
    fn new(width: f32) -> Self {
        Self::build(width, None)
    }

    fn build(width: f32, source: Option<Box<dyn TextureSource>>) -> Self {
        let content = Content::from_json(PROFILE, SKILLS, PROJECTS).unwrap();
        Self::with_content(width, content, source)
    }

    fn with_content(width: f32, content: Content, source: Option<Box<dyn TextureSource>>) -> Self {
        let mut backend = HeadlessBackend::new();
        let mut overlay = Overlay::new();
        let mut ctl = ShowcaseController::new(
            &PrismConfig::default(),
            content,
            Color::from_u32(0xccff00),
            Surface::new(width, 768.0, 1.0).unwrap(),
            &mut backend,
            &mut overlay,
            21,
        )
        .unwrap();
        if let Some(source) = source {
            ctl = ctl.with_source(source);
        }
        Self {
            backend,
            overlay,
            ctl,
        }
    }

    fn input(&mut self, input: NavInput) {
        self.ctl
            .input(input, &mut self.backend, &mut self.overlay)
            .unwrap();
    }

    fn select(&mut self, index: usize, touch: bool) {
        self.ctl
            .select(index, touch, &mut self.backend, &mut self.overlay)
            .unwrap();
    }

    fn run(&mut self, secs: f32) {
        let steps = (secs / 0.05).round() as usize;
        for _ in 0..steps {
            self.ctl.tick(0.05, &mut self.backend).unwrap();
            for event in self.overlay.tick(0.05) {
                self.ctl.handle(event);
            }
        }
    }

    fn dispose(&mut self) -> Teardown {
        self.ctl.dispose(&mut self.backend, &mut self.overlay)
    }
}

#[test]
fn select_renders_project_and_settles_after_entrance() {
    let mut h = Harness::new(1024.0);
    h.select(0, false);

    assert_eq!(
        h.ctl.state(),
        NavState::DetailTransitioning {
            project: 0,
            image: 0
        }
    );
    assert_eq!(h.backend.live_of(ResourceKind::Texture), 1);
    assert_eq!(h.backend.live_of(ResourceKind::Video), 1);
    // Text block, two tools, two thumbnails.
    assert_eq!(h.ctl.detail_items().len(), 5);

    h.run(0.1);
    let items = h.ctl.detail_items().to_vec();
    assert!(items.iter().all(|id| h.overlay.stage.alpha(*id) == Some(0.0)));

    h.run(1.1);
    assert_eq!(
        h.ctl.state(),
        NavState::Detail {
            project: 0,
            image: 0
        }
    );
    assert!(items.iter().all(|id| h.overlay.stage.alpha(*id) == Some(1.0)));
    assert_eq!(h.overlay.stage.alpha(h.ctl.canvas()), Some(1.0));
    h.dispose();
}

#[test]
fn narrow_viewport_uses_two_step_and_skips_video() {
    let mut h = Harness::new(500.0);
    assert_eq!(h.ctl.select_mode(false), SelectMode::TwoStep);

    h.select(0, false);
    assert_eq!(h.ctl.state(), NavState::Previewing(0));
    let (index, accent) = h.ctl.highlight().cloned().unwrap();
    assert_eq!(index, 0);
    let item = h.overlay.stage.get(h.ctl.grid_items()[0]).unwrap();
    assert_eq!(item.background.as_deref(), Some(accent.background.as_str()));

    h.select(0, false);
    assert_eq!(h.ctl.state().project(), Some(0));
    assert_eq!(h.backend.live_of(ResourceKind::Video), 0);
    h.dispose();
}

#[test]
fn touch_on_wide_viewport_is_two_step() {
    let mut h = Harness::new(1024.0);
    assert_eq!(h.ctl.select_mode(true), SelectMode::TwoStep);
    assert_eq!(h.ctl.select_mode(false), SelectMode::Direct);
    h.dispose();
}

#[test]
fn steps_during_entrance_are_dropped() {
    let mut h = Harness::new(1024.0);
    h.select(0, false);
    h.input(NavInput::Project(Step::Next));
    h.input(NavInput::Project(Step::Next));
    assert_eq!(h.ctl.state().project(), Some(0));

    h.run(1.2);
    h.input(NavInput::Project(Step::Prev));
    assert_eq!(h.ctl.state().project(), Some(2));
    // Project three has no video: the previous one is released.
    assert_eq!(h.backend.live_of(ResourceKind::Video), 0);
    assert_eq!(h.ctl.detail_items().len(), 5);
    h.dispose();
}

#[test]
fn image_step_settles_after_texture_swap() {
    let mut h = Harness::new(1024.0);
    h.select(2, false);
    h.run(1.2);

    h.input(NavInput::Image(Step::Prev));
    assert_eq!(
        h.ctl.state(),
        NavState::DetailTransitioning {
            project: 2,
            image: 2
        }
    );
    assert!(h.ctl.scene().is_swapping());
    h.run(0.6);
    assert_eq!(
        h.ctl.state(),
        NavState::Detail {
            project: 2,
            image: 2
        }
    );
    assert!(!h.ctl.scene().is_swapping());
    assert_eq!(h.backend.live_of(ResourceKind::Texture), 1);
    h.dispose();
}

#[test]
fn lightbox_round_trip() {
    let mut h = Harness::new(1024.0);
    h.select(2, false);
    h.run(1.2);
    h.input(NavInput::HoverImage(1));
    let detail = h.ctl.state();

    h.input(NavInput::OpenLightbox);
    let front = h.ctl.lightbox().unwrap().front();
    assert_eq!(
        h.overlay.stage.get(front).unwrap().source.as_deref(),
        Some("3b.png")
    );

    h.input(NavInput::LightboxStep(Step::Next));
    h.input(NavInput::LightboxStep(Step::Next));
    assert_eq!(h.ctl.state().image(), Some(2));
    h.run(0.5);
    h.input(NavInput::LightboxStep(Step::Next));
    assert_eq!(h.ctl.state().image(), Some(0));
    let lightbox = h.ctl.lightbox().unwrap();
    assert_eq!(lightbox.source(&h.overlay), Some("3a.png"));
    h.run(0.5);

    h.input(NavInput::CloseLightbox);
    assert!(h.ctl.lightbox().is_none());
    assert_eq!(h.ctl.state().project(), detail.project());
    assert_eq!(h.ctl.state().image(), Some(0));
    h.dispose();
}

#[test]
fn close_returns_to_grid_and_hides_canvas() {
    let mut h = Harness::new(1024.0);
    h.select(0, false);
    h.run(1.2);
    h.input(NavInput::Close);
    assert_eq!(h.ctl.state(), NavState::Grid);
    assert!(h.ctl.detail_items().is_empty());
    assert_eq!(h.overlay.stage.alpha(h.ctl.canvas()), Some(0.0));
    assert_eq!(h.backend.live_of(ResourceKind::Video), 0);
    h.dispose();
}

#[test]
fn scroll_reveals_grid_once() {
    let mut h = Harness::new(1024.0);
    let grid = h.ctl.grid_items().to_vec();
    let below = Rect::new(0.0, 2000.0, 1024.0, 900.0);
    h.ctl.on_scroll(Some(&below), 768.0, &mut h.overlay);
    h.run(0.5);
    assert_eq!(h.overlay.stage.alpha(grid[0]), Some(0.0));

    let visible = Rect::new(0.0, 300.0, 1024.0, 900.0);
    h.ctl.on_scroll(Some(&visible), 768.0, &mut h.overlay);
    h.run(2.1);
    assert_eq!(h.overlay.stage.alpha(h.ctl.container()), Some(1.0));
    assert!(grid.iter().all(|id| h.overlay.stage.alpha(*id) == Some(1.0)));
    h.dispose();
}

#[test]
fn replacing_content_clamps_the_view() {
    let mut h = Harness::new(1024.0);
    h.select(2, false);
    h.run(1.2);
    h.input(NavInput::Image(Step::Prev));
    h.run(0.6);

    let projects = r#"[{"title": "Solo", "images": ["s1.png", "s2.png"]}]"#;
    let content = Content::from_json(PROFILE, SKILLS, projects).unwrap();
    h.ctl
        .replace_content(content, &mut h.backend, &mut h.overlay)
        .unwrap();
    assert_eq!(
        h.ctl.state(),
        NavState::Detail {
            project: 0,
            image: 1
        }
    );
    assert_eq!(h.ctl.grid_items().len(), 1);
    assert_eq!(h.ctl.detail_items().len(), 3);
    h.dispose();
}

#[test]
fn missing_texture_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut h = Harness::build(1024.0, Some(Box::new(FileSource::new(dir.path()))));
    h.select(1, false);
    assert_eq!(h.ctl.state().project(), Some(1));
    assert_eq!(h.backend.live_of(ResourceKind::Texture), 0);
    h.dispose();
}

#[test]
fn unplayable_video_still_settles_the_detail_view() {
    let mut content = Content::from_json(PROFILE, SKILLS, PROJECTS).unwrap();
    content.projects[0].videos = vec![String::new()];
    let mut h = Harness::with_content(1024.0, content, None);

    h.select(0, false);
    assert_eq!(h.backend.live_of(ResourceKind::Video), 0);
    assert_eq!(h.backend.live_of(ResourceKind::Texture), 1);

    h.run(1.5);
    assert_eq!(
        h.ctl.state(),
        NavState::Detail {
            project: 0,
            image: 0
        }
    );
    h.input(NavInput::Project(Step::Next));
    h.run(1.5);
    assert_eq!(h.ctl.state().project(), Some(1));
    h.dispose();
    assert_eq!(h.backend.live_resources(), 0);
}

#[test]
fn dispose_releases_everything() {
    let mut h = Harness::new(1024.0);
    h.ctl.on_scroll(Some(&Rect::new(0.0, 0.0, 1024.0, 900.0)), 768.0, &mut h.overlay);
    h.select(0, false);
    h.run(0.3);
    assert!(h.ctl.live_tweens(&h.overlay) > 0);

    let teardown = h.dispose();
    assert!(teardown.tweens > 0);
    assert!(teardown.resources > 0);
    assert_eq!(h.backend.live_resources(), 0);
    assert_eq!(h.overlay.live_tweens(), 0);
    assert!(h.overlay.stage.is_empty());
    assert_eq!(h.ctl.live_resources(), 0);
    assert_eq!(h.dispose(), Teardown::default());
}
