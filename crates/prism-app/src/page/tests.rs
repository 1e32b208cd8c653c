use super::script::{Action, Cue, Script};
use super::*;
use prism_config::schema::PerformancePreset;
use prism_showcase::{NavInput, Step};

const PROFILE: &str = r#"{"name": "Ada", "headline": "motion engineer"}"#;
const SKILLS: &str = r#"[{"category": "Web", "skills": [{"title": "CSS", "level": 10}, {"title": "GLSL", "level": 6}]}]"#;
const PROJECTS: &str = r#"[
    {"title": "One", "tools": ["gsap"], "images": ["a.png", "b.png"], "videos": ["a.mp4"]},
    {"title": "Two", "images": ["c.png", "d.png", "e.png"]},
    {"title": "Three", "images": ["f.png"]}
]"#;

fn content_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("profile.json"), PROFILE).unwrap();
    std::fs::write(dir.path().join("skills.json"), SKILLS).unwrap();
    std::fs::write(dir.path().join("projects.json"), PROJECTS).unwrap();
    dir
}

fn config() -> PrismConfig {
    let mut config = PrismConfig::default();
    config.performance.preset = PerformancePreset::Low;
    config
}

fn options(dir: &Path) -> PageOptions {
    PageOptions {
        content_dir: dir.to_path_buf(),
        seed: 7,
        signals: DeviceSignals::default(),
        surface: Surface::new(1280.0, 800.0, 1.0).unwrap(),
    }
}

impl Page {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn skills(&self) -> Option<&SkillBoard> {
        self.skills.as_ref()
    }

    fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    fn backend(&self) -> &HeadlessBackend {
        &self.backend
    }
}

fn play(page: &mut Page, secs: f32) {
    let frames = (secs * 60.0).round() as u32;
    for _ in 0..frames {
        page.frame(1.0 / 60.0).unwrap();
    }
}

#[test]
fn header_palette_is_evenly_spaced_with_extras() {
    let seed = Color::from_u32(0xccff00);
    let mut rng = StdRng::seed_from_u64(3);
    let mut sizes = Vec::new();
    for _ in 0..64 {
        let palette = header_palette(seed, &mut rng).unwrap();
        assert!((3..=6).contains(&palette.len()));
        sizes.push(palette.len());
    }
    assert!(sizes.contains(&3));
    assert!(sizes.iter().any(|&n| n > 3));
}

#[test]
fn sections_stack_down_the_page() {
    let layout = Layout::new(Surface::new(1000.0, 800.0, 1.0).unwrap());
    assert_eq!(layout.header.bottom(), 800.0);
    assert!(layout.skills.y > layout.header.bottom());
    assert!(layout.showcase.y > layout.skills.bottom());

    let client = Layout::client_rect(&layout.skills, 100.0);
    assert_eq!(client.y, layout.skills.y - 100.0);
    assert_eq!(client.height, layout.skills.height);
}

#[test]
fn tour_ends_on_the_grid_with_nothing_leaked() {
    let dir = content_dir();
    let options = options(dir.path());
    let layout = Layout::new(options.surface);
    let script = Script::tour(800.0, &layout, 1280.0);

    let report = run(&config(), &options, script, None).unwrap();
    assert_eq!(report.frames, 1200);
    assert!(!report.offline);
    assert_eq!(report.tier, Tier::Low);
    assert_eq!(report.final_state, Some(NavState::Grid));
    assert!(report.backdrop_redraws >= 2);
    assert!(report.released.resources > 0);
    assert!(report.leaks.is_clean(), "{:?}", report.leaks);
}

#[test]
fn fixed_frame_count_runs_at_the_configured_rate() {
    let dir = content_dir();
    let report = run(&config(), &options(dir.path()), Script::default(), Some(30)).unwrap();
    assert_eq!(report.frames, 30);
    assert!((report.seconds - 0.5).abs() < 1e-3);
    assert!((report.fps - 60.0).abs() < 1e-3);
    assert!(report.leaks.is_clean());
}

#[test]
fn missing_content_runs_offline() {
    let dir = tempfile::tempdir().unwrap();
    let script = Script::new(vec![
        Cue::new(0.1, Action::Scroll(2000.0)),
        Cue::new(0.2, Action::Select { index: 0, touch: false }),
    ]);
    let report = run(&config(), &options(dir.path()), script, Some(60)).unwrap();
    assert!(report.offline);
    assert_eq!(report.final_state, None);
    assert!(report.leaks.is_clean());
}

#[test]
fn scrolling_reveals_skills_and_grid() {
    let dir = content_dir();
    let mut page = Page::build(&config(), &options(dir.path())).unwrap();
    assert!(!page.skills().unwrap().is_revealed());

    let showcase_y = page.layout().showcase.y;
    page.apply(Action::Scroll(showcase_y)).unwrap();
    play(&mut page, 3.0);
    assert!(page.skills().unwrap().is_revealed());
    let container = page.showcase().unwrap().container();
    assert_eq!(page.overlay().stage.alpha(container), Some(1.0));
    page.teardown();
    assert!(page.leaks().is_clean());
}

#[test]
fn selecting_and_paging_a_project() {
    let dir = content_dir();
    let mut page = Page::build(&config(), &options(dir.path())).unwrap();
    let showcase_y = page.layout().showcase.y;
    page.apply(Action::Scroll(showcase_y)).unwrap();
    page.apply(Action::Select { index: 1, touch: false }).unwrap();
    play(&mut page, 2.0);
    assert_eq!(
        page.showcase().unwrap().state(),
        NavState::Detail { project: 1, image: 0 }
    );

    page.apply(Action::Nav(NavInput::Image(Step::Prev))).unwrap();
    play(&mut page, 1.0);
    let state = page.showcase().unwrap().state();
    let images = page.showcase().unwrap().content().projects[1].images.len();
    assert_eq!(state, NavState::Detail { project: 1, image: images - 1 });
    page.teardown();
    assert!(page.leaks().is_clean());
}

#[test]
fn teardown_is_idempotent() {
    let dir = content_dir();
    let mut page = Page::build(&config(), &options(dir.path())).unwrap();
    play(&mut page, 0.5);
    let first = page.teardown();
    assert!(first.tweens > 0);
    assert_eq!(page.teardown(), Teardown::default());
    assert_eq!(page.backend().live_resources(), 0);
}

#[test]
fn bad_seed_color_fails_the_build() {
    let dir = content_dir();
    let mut config = config();
    config.palette.seed = "not a color".into();
    let err = Page::build(&config, &options(dir.path())).err().unwrap();
    assert!(matches!(err, PrismError::Config(_)));
}

#[test]
fn resize_narrows_selection_to_two_steps() {
    let dir = content_dir();
    let mut page = Page::build(&config(), &options(dir.path())).unwrap();
    page.apply(Action::Resize { width: 400.0, height: 800.0 }).unwrap();
    page.apply(Action::Select { index: 2, touch: false }).unwrap();
    assert_eq!(page.showcase().unwrap().state(), NavState::Previewing(2));
    page.apply(Action::Select { index: 2, touch: false }).unwrap();
    assert!(page.showcase().unwrap().state().is_in_flight());
    page.teardown();
}

#[test]
fn collapsed_viewport_keeps_the_last_surface() {
    let dir = content_dir();
    let mut page = Page::build(&config(), &options(dir.path())).unwrap();
    page.apply(Action::Resize { width: 1280.0, height: 0.0 }).unwrap();
    page.apply(Action::Resize { width: 0.0, height: 800.0 }).unwrap();
    assert_eq!(page.layout().header.height, 800.0);
    assert_eq!(page.layout().header.width, 1280.0);

    play(&mut page, 0.5);
    page.apply(Action::Resize { width: 640.0, height: 480.0 }).unwrap();
    assert_eq!(page.layout().header.height, 480.0);
    page.teardown();
    assert!(page.leaks().is_clean());
}
