//! One-shot viewport reveal triggers.

use prism_common::Rect;

/// Fires once when an element's top rises above `viewport_height - threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTrigger {
    threshold: f64,
    armed: bool,
}

impl RevealTrigger {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            armed: true,
        }
    }

    /// Returns `true` exactly once, on the first qualifying check.
    pub fn check(&mut self, rect: Option<&Rect>, viewport_height: f64) -> bool {
        let Some(rect) = rect else {
            return false;
        };
        if self.armed && rect.y < viewport_height - self.threshold {
            self.armed = false;
            return true;
        }
        false
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::new(100.0)
    }
}

/// Whether any part of `rect` intersects the viewport vertically.
pub fn in_viewport(rect: &Rect, viewport_height: f64) -> bool {
    rect.y < viewport_height && rect.bottom() > 0.0
}
