//! Scripted visitor input for a headless session.

use prism_showcase::{NavInput, Step};

/// One thing a visitor does.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Scroll the page to this offset in CSS pixels.
    Scroll(f64),
    /// Pointer over a skill bar.
    HoverSkill(usize),
    /// Click or tap a grid item.
    Select { index: usize, touch: bool },
    Nav(NavInput),
    /// The requested project video has data.
    VideoReady,
    Resize { width: f32, height: f32 },
}

/// An action and the page time at which it happens.
#[derive(Debug, Clone, PartialEq)]
pub struct Cue {
    pub at: f32,
    pub action: Action,
}

impl Cue {
    pub fn new(at: f32, action: Action) -> Self {
        Self { at, action }
    }
}

/// Cues ordered by time, consumed as the clock passes them.
#[derive(Debug, Clone, Default)]
pub struct Script {
    cues: Vec<Cue>,
    next: usize,
}

impl Script {
    pub fn new(mut cues: Vec<Cue>) -> Self {
        cues.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { cues, next: 0 }
    }

    /// A visit that exercises every part of the page: scroll down past the
    /// skills to the showcase, open a project, page through its images and
    /// the lightbox, switch projects, go back to the grid, then shrink the
    /// window and pick a project in two steps.
    pub fn tour(viewport_height: f64, layout: &super::Layout, width: f32) -> Self {
        let skills = layout.skills.y;
        let showcase = layout.showcase.y;
        Self::new(vec![
            Cue::new(2.0, Action::Scroll(viewport_height * 0.5)),
            Cue::new(3.0, Action::Scroll(skills)),
            Cue::new(4.5, Action::HoverSkill(0)),
            Cue::new(5.0, Action::Scroll(showcase)),
            Cue::new(6.0, Action::Nav(NavInput::Hover(0))),
            Cue::new(6.5, Action::Select { index: 0, touch: false }),
            Cue::new(7.0, Action::VideoReady),
            Cue::new(8.5, Action::Nav(NavInput::Image(Step::Next))),
            Cue::new(9.5, Action::Nav(NavInput::OpenLightbox)),
            Cue::new(10.5, Action::Nav(NavInput::LightboxStep(Step::Next))),
            Cue::new(11.5, Action::Nav(NavInput::CloseLightbox)),
            Cue::new(12.0, Action::Nav(NavInput::Project(Step::Next))),
            Cue::new(14.0, Action::Nav(NavInput::Close)),
            Cue::new(
                14.5,
                Action::Resize {
                    width: width / 3.0,
                    height: viewport_height as f32,
                },
            ),
            Cue::new(15.0, Action::Select { index: 1, touch: true }),
            Cue::new(15.5, Action::Select { index: 1, touch: true }),
            Cue::new(18.0, Action::Nav(NavInput::Close)),
        ])
    }

    /// Every cue due at or before `time`, in order.
    pub fn due(&mut self, time: f32) -> Vec<Action> {
        let mut due = Vec::new();
        while let Some(cue) = self.cues.get(self.next) {
            if cue.at > time {
                break;
            }
            due.push(cue.action.clone());
            self.next += 1;
        }
        due
    }

    /// Page time of the last cue.
    pub fn end(&self) -> f32 {
        self.cues.last().map(|c| c.at).unwrap_or(0.0)
    }
}
