//! Project showcase navigation.
//!
//! The navigator is a tagged state plus one pure [`transition`] function.
//! Inputs never touch the scene directly: each transition returns the
//! effects the controller must run (texture swaps, accent recolors,
//! entrance replays, lightbox crossfades). While a transition is in
//! flight, prev/next requests are dropped until [`NavInput::TransitionDone`]
//! arrives.

#[cfg(test)]
mod tests;

use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Grid,
    /// First tap on a touch or narrow viewport.
    Previewing(usize),
    Detail {
        project: usize,
        image: usize,
    },
    /// Detail view whose entrance or texture swap is still running.
    DetailTransitioning {
        project: usize,
        image: usize,
    },
    /// Full-size image over the detail view.
    Lightbox {
        project: usize,
        image: usize,
        crossfading: bool,
    },
}

impl NavState {
    /// Active project, if any view of one is open.
    pub fn project(&self) -> Option<usize> {
        match *self {
            NavState::Grid | NavState::Previewing(_) => None,
            NavState::Detail { project, .. }
            | NavState::DetailTransitioning { project, .. }
            | NavState::Lightbox { project, .. } => Some(project),
        }
    }

    pub fn image(&self) -> Option<usize> {
        match *self {
            NavState::Grid | NavState::Previewing(_) => None,
            NavState::Detail { image, .. }
            | NavState::DetailTransitioning { image, .. }
            | NavState::Lightbox { image, .. } => Some(image),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(
            self,
            NavState::DetailTransitioning { .. }
                | NavState::Lightbox {
                    crossfading: true,
                    ..
                }
        )
    }
}

/// How a grid tap is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    /// Pointer on a wide viewport: one click opens the project.
    Direct,
    /// Touch or narrow viewport: first tap previews, second tap opens.
    TwoStep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

impl Step {
    fn delta(self) -> isize {
        match self {
            Step::Prev => -1,
            Step::Next => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NavInput {
    /// Pointer entered a grid item.
    Hover(usize),
    Select {
        index: usize,
        mode: SelectMode,
    },
    Project(Step),
    Image(Step),
    /// Pointer entered a detail thumbnail.
    HoverImage(usize),
    Close,
    OpenLightbox,
    /// Open the lightbox on a specific thumbnail.
    OpenLightboxAt(usize),
    LightboxStep(Step),
    CloseLightbox,
    TransitionDone,
    /// New content arrived; carries the image count of every project.
    ContentReplaced(Vec<usize>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// Hover accent on a grid item.
    Highlight(usize),
    /// Render the project's first image on the 3D box and pick its video.
    ShowProject(usize),
    /// Swap the 3D texture to another image of the active project.
    ShowImage { project: usize, image: usize },
    RecolorAccent,
    /// Replay the staggered fade-in of the detail text and thumbnails.
    ReplayEntrance,
    ShowGrid,
    OpenLightbox { project: usize, image: usize },
    CrossfadeLightbox {
        project: usize,
        image: usize,
        step: Step,
    },
    CloseLightbox,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: NavState,
    pub effects: Vec<NavEffect>,
}

impl Transition {
    fn stay(state: NavState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    fn to(state: NavState, effects: Vec<NavEffect>) -> Self {
        Self { state, effects }
    }
}

/// `index + delta` wrapped into `0..len`.
pub fn wrap(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as isize + delta).rem_euclid(len as isize) as usize
}

/// Clamp `index` to the last valid position of a list of `len`.
pub fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

fn open_project(project: usize) -> Transition {
    Transition::to(
        NavState::DetailTransitioning { project, image: 0 },
        vec![
            NavEffect::ShowProject(project),
            NavEffect::RecolorAccent,
            NavEffect::ReplayEntrance,
        ],
    )
}

fn show_image(project: usize, image: usize) -> Transition {
    Transition::to(
        NavState::DetailTransitioning { project, image },
        vec![NavEffect::ShowImage { project, image }],
    )
}

/// Apply `input` to `state`. `image_counts[p]` is the number of images of
/// project `p`; every project has at least one.
pub fn transition(state: NavState, input: &NavInput, image_counts: &[usize]) -> Transition {
    let projects = image_counts.len();
    let images_of = |p: usize| image_counts.get(p).copied().unwrap_or(0);

    if let NavInput::ContentReplaced(counts) = input {
        return replace_content(state, counts);
    }

    match (state, input) {
        (NavState::Grid, NavInput::Hover(index)) if *index < projects => {
            Transition::stay(state).with(NavEffect::Highlight(*index))
        }

        (NavState::Grid | NavState::Previewing(_), NavInput::Select { index, .. })
            if *index >= projects =>
        {
            warn!(index, projects, "select out of range ignored");
            Transition::stay(state)
        }
        (NavState::Grid, NavInput::Select { index, mode }) => match mode {
            SelectMode::Direct => open_project(*index),
            SelectMode::TwoStep => Transition::to(
                NavState::Previewing(*index),
                vec![NavEffect::Highlight(*index)],
            ),
        },
        (NavState::Previewing(current), NavInput::Select { index, mode }) => {
            if *index == current || *mode == SelectMode::Direct {
                open_project(*index)
            } else {
                Transition::to(
                    NavState::Previewing(*index),
                    vec![NavEffect::Highlight(*index)],
                )
            }
        }
        (NavState::Previewing(_), NavInput::Close) => {
            Transition::to(NavState::Grid, vec![NavEffect::ShowGrid])
        }

        (NavState::Detail { project, .. }, NavInput::Project(step)) => {
            open_project(wrap(project, step.delta(), projects))
        }
        (NavState::Detail { project, image }, NavInput::Image(step)) => {
            show_image(project, wrap(image, step.delta(), images_of(project)))
        }
        (NavState::Detail { project, image }, NavInput::HoverImage(index)) => {
            let index = clamp_index(*index, images_of(project));
            if index == image {
                Transition::stay(state)
            } else {
                Transition::to(
                    NavState::Detail {
                        project,
                        image: index,
                    },
                    vec![NavEffect::ShowImage {
                        project,
                        image: index,
                    }],
                )
            }
        }
        (NavState::Detail { project, image }, NavInput::OpenLightbox) => {
            open_lightbox(project, clamp_index(image, images_of(project)))
        }
        (NavState::Detail { project, .. }, NavInput::OpenLightboxAt(index)) => {
            open_lightbox(project, clamp_index(*index, images_of(project)))
        }
        (
            NavState::Detail { .. } | NavState::DetailTransitioning { .. },
            NavInput::Close,
        ) => Transition::to(NavState::Grid, vec![NavEffect::ShowGrid]),

        (
            NavState::DetailTransitioning { .. },
            NavInput::Project(_) | NavInput::Image(_) | NavInput::HoverImage(_),
        ) => {
            debug!(?input, "navigation ignored while transitioning");
            Transition::stay(state)
        }
        (NavState::DetailTransitioning { project, image }, NavInput::TransitionDone) => {
            Transition::stay(NavState::Detail { project, image })
        }

        (
            NavState::Lightbox {
                project,
                image,
                crossfading: false,
            },
            NavInput::LightboxStep(step),
        ) => {
            let next = wrap(image, step.delta(), images_of(project));
            Transition::to(
                NavState::Lightbox {
                    project,
                    image: next,
                    crossfading: true,
                },
                vec![NavEffect::CrossfadeLightbox {
                    project,
                    image: next,
                    step: *step,
                }],
            )
        }
        (
            NavState::Lightbox {
                crossfading: true, ..
            },
            NavInput::LightboxStep(_),
        ) => {
            debug!("lightbox step ignored during crossfade");
            Transition::stay(state)
        }
        (NavState::Lightbox { project, image, .. }, NavInput::TransitionDone) => {
            Transition::stay(NavState::Lightbox {
                project,
                image,
                crossfading: false,
            })
        }
        (NavState::Lightbox { project, image, .. }, NavInput::CloseLightbox | NavInput::Close) => {
            Transition::to(
                NavState::Detail { project, image },
                vec![NavEffect::CloseLightbox],
            )
        }

        _ => Transition::stay(state),
    }
}

impl Transition {
    fn with(mut self, effect: NavEffect) -> Self {
        self.effects.push(effect);
        self
    }
}

fn open_lightbox(project: usize, image: usize) -> Transition {
    Transition::to(
        NavState::Lightbox {
            project,
            image,
            crossfading: false,
        },
        vec![NavEffect::OpenLightbox { project, image }],
    )
}

/// Clamp the active project and image into the new content.
fn replace_content(state: NavState, counts: &[usize]) -> Transition {
    if counts.is_empty() {
        let effects = match state {
            NavState::Grid => Vec::new(),
            _ => vec![NavEffect::ShowGrid],
        };
        return Transition::to(NavState::Grid, effects);
    }
    let clamp = |project: usize, image: usize| {
        let project = clamp_index(project, counts.len());
        (project, clamp_index(image, counts[project]))
    };
    let state = match state {
        NavState::Grid => NavState::Grid,
        NavState::Previewing(i) => NavState::Previewing(clamp_index(i, counts.len())),
        NavState::Detail { project, image } => {
            let (project, image) = clamp(project, image);
            NavState::Detail { project, image }
        }
        NavState::DetailTransitioning { project, image } => {
            let (project, image) = clamp(project, image);
            NavState::DetailTransitioning { project, image }
        }
        NavState::Lightbox {
            project,
            image,
            crossfading,
        } => {
            let (project, image) = clamp(project, image);
            NavState::Lightbox {
                project,
                image,
                crossfading,
            }
        }
    };
    Transition::stay(state)
}

/// The navigator with the content shape it navigates over.
#[derive(Debug, Clone)]
pub struct Navigator {
    state: NavState,
    image_counts: Vec<usize>,
}

impl Navigator {
    pub fn new(image_counts: Vec<usize>) -> Self {
        Self {
            state: NavState::Grid,
            image_counts,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn project_count(&self) -> usize {
        self.image_counts.len()
    }

    /// Apply `input` and return the effects to run.
    pub fn apply(&mut self, input: NavInput) -> Vec<NavEffect> {
        let next = transition(self.state, &input, &self.image_counts);
        if let NavInput::ContentReplaced(counts) = input {
            self.image_counts = counts;
        }
        if next.state != self.state {
            debug!(from = ?self.state, to = ?next.state, "navigator transition");
        }
        self.state = next.state;
        next.effects
    }
}
