//! Scroll-reactive damping of bound fields.

use std::fmt::Debug;

use prism_common::Rect;
use tracing::debug;

use crate::animator::Animator;
use crate::ease::Ease;
use crate::tween::{OwnerId, Overwrite, TweenHandle, TweenSpec};

/// How the scroll offset is derived from the reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// `scroll_y - rect.y`
    ScrollRelative,
    /// `rect.y`
    ReferenceTop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBinding<K> {
    pub key: K,
    pub factor: f64,
}

/// Maps scroll offset onto fields through short damped tweens.
///
/// Every scroll event kills the previous damping tweens before starting new
/// ones, so fast scrolling never queues work.
#[derive(Debug, Clone)]
pub struct ScrollBinder<K> {
    owner: OwnerId,
    mode: ScrollMode,
    duration: f32,
    ease: Ease,
    bindings: Vec<ScrollBinding<K>>,
    in_flight: Vec<TweenHandle>,
}

impl<K: Copy + PartialEq + Debug> ScrollBinder<K> {
    pub fn new(owner: OwnerId, mode: ScrollMode, duration: f32, ease: Ease) -> Self {
        Self {
            owner,
            mode,
            duration,
            ease,
            bindings: Vec::new(),
            in_flight: Vec::new(),
        }
    }

    pub fn bind(mut self, key: K, factor: f64) -> Self {
        self.bindings.push(ScrollBinding { key, factor });
        self
    }

    pub fn bindings(&self) -> &[ScrollBinding<K>] {
        &self.bindings
    }

    pub fn offset(&self, scroll_y: f64, rect: &Rect) -> f64 {
        match self.mode {
            ScrollMode::ScrollRelative => scroll_y - rect.y,
            ScrollMode::ReferenceTop => rect.y,
        }
    }

    /// React to a scroll event. A missing reference element is a no-op.
    ///
    /// Returns `true` when new damping tweens were started.
    pub fn on_scroll<E>(
        &mut self,
        animator: &mut Animator<K, E>,
        scroll_y: f64,
        rect: Option<&Rect>,
    ) -> bool {
        let Some(rect) = rect else {
            debug!("scroll reference missing; ignoring scroll event");
            return false;
        };

        for handle in self.in_flight.drain(..) {
            animator.kill(handle);
        }

        let offset = self.offset(scroll_y, rect);
        for binding in &self.bindings {
            let spec = TweenSpec::new(self.duration)
                .to(binding.key, (binding.factor * offset) as f32)
                .ease(self.ease)
                .overwrite(Overwrite::Auto);
            self.in_flight.push(animator.add(self.owner, spec));
        }
        true
    }

    /// Handles of damping tweens that may still be running.
    pub fn in_flight(&self) -> &[TweenHandle] {
        &self.in_flight
    }
}
