//! Animatable page elements.
//!
//! The showcase's 2D side (gradient layers, lightbox images, skill bars,
//! entrance items) is modeled as a flat set of elements with a handful of
//! tweenable properties. Whatever renders the page reads them each frame.

use std::collections::BTreeMap;

use prism_motion::{Animatable, Animator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementProp {
    Alpha,
    X,
    Y,
    /// Width as a percentage of the parent.
    Width,
}

pub type ElementKey = (ElementId, ElementProp);

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub alpha: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    /// CSS background, e.g. a gradient string.
    pub background: Option<String>,
    /// Image URL shown by the element.
    pub source: Option<String>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alpha: 1.0,
            x: 0.0,
            y: 0.0,
            width: 100.0,
            background: None,
            source: None,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Events fired by page tweens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageEvent {
    /// An old backdrop layer finished fading out.
    LayerFaded(ElementId),
    /// Time to pick a new backdrop palette.
    BackdropRedraw,
    EntranceDone,
    LightboxSettled,
    ImageSettled,
}

pub type StageAnimator = Animator<ElementKey, StageEvent>;

#[derive(Debug, Default)]
pub struct Stage {
    elements: BTreeMap<ElementId, Element>,
    next_id: u32,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: Element) -> ElementId {
        self.next_id += 1;
        let id = ElementId(self.next_id);
        self.elements.insert(id, element);
        id
    }

    pub fn remove(&mut self, id: ElementId) -> Option<Element> {
        self.elements.remove(&id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn alpha(&self, id: ElementId) -> Option<f32> {
        self.get(id).map(|e| e.alpha)
    }
}

/// The page's 2D elements and the animator that drives them.
///
/// Every 2D component shares one overlay; the page ticks it once per frame
/// and routes the returned events back to their components.
#[derive(Default)]
pub struct Overlay {
    pub stage: Stage,
    pub animator: StageAnimator,
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, dt: f32) -> Vec<StageEvent> {
        self.animator.tick(dt, &mut self.stage)
    }

    /// Cancel tweens on `element` and drop it.
    pub fn discard(&mut self, element: ElementId) {
        self.animator.kill_matching(|(id, _)| *id == element);
        self.stage.remove(element);
    }

    pub fn live_tweens(&self) -> usize {
        self.animator.live_handles()
    }
}

impl Animatable<ElementKey> for Stage {
    fn get(&self, (id, prop): ElementKey) -> Option<f32> {
        let element = self.elements.get(&id)?;
        Some(match prop {
            ElementProp::Alpha => element.alpha,
            ElementProp::X => element.x,
            ElementProp::Y => element.y,
            ElementProp::Width => element.width,
        })
    }

    fn set(&mut self, (id, prop): ElementKey, value: f32) {
        let Some(element) = self.elements.get_mut(&id) else {
            return;
        };
        match prop {
            ElementProp::Alpha => element.alpha = value.clamp(0.0, 1.0),
            ElementProp::X => element.x = value,
            ElementProp::Y => element.y = value,
            ElementProp::Width => element.width = value,
        }
    }
}
