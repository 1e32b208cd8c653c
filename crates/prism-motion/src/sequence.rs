//! Timeline-style sequencing of tweens.

use crate::tween::TweenSpec;

/// Where the next entry starts, relative to what is already placed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Position {
    /// At the end of the timeline so far.
    #[default]
    End,
    /// At the end of the previously added entry.
    AfterPrevious,
    /// At the same time as the previously added entry.
    WithPrevious,
    /// At an absolute time.
    At(f32),
    /// Relative to the end of the timeline; negative values overlap.
    Offset(f32),
}

/// Start offsets spreading `count` items evenly over `amount` seconds.
pub fn stagger_offsets(count: usize, amount: f32) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        n => {
            let step = amount / (n - 1) as f32;
            (0..n).map(|i| i as f32 * step).collect()
        }
    }
}

/// An ordered set of tweens with resolved start offsets.
#[derive(Debug, Clone)]
pub struct Sequence<K, E> {
    entries: Vec<(f32, TweenSpec<K, E>)>,
    prev_start: f32,
    prev_end: f32,
    end: f32,
    on_complete: Option<E>,
}

impl<K, E> Default for Sequence<K, E> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            prev_start: 0.0,
            prev_end: 0.0,
            end: 0.0,
            on_complete: None,
        }
    }
}

impl<K, E> Sequence<K, E> {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve(&self, position: Position) -> f32 {
        let start = match position {
            Position::End => self.end,
            Position::AfterPrevious => self.prev_end,
            Position::WithPrevious => self.prev_start,
            Position::At(t) => t,
            Position::Offset(dt) => self.end + dt,
        };
        start.max(0.0)
    }

    fn span(spec: &TweenSpec<K, E>) -> f32 {
        spec.total_duration()
            .unwrap_or(spec.delay + spec.duration)
    }

    pub fn add(mut self, spec: TweenSpec<K, E>, position: Position) -> Self {
        let start = self.resolve(position);
        let end = start + Self::span(&spec);
        self.prev_start = start;
        self.prev_end = end;
        self.end = self.end.max(end);
        self.entries.push((start, spec));
        self
    }

    /// Add a group whose members start `amount / (n - 1)` seconds apart.
    pub fn stagger(mut self, specs: Vec<TweenSpec<K, E>>, amount: f32, position: Position) -> Self {
        if specs.is_empty() {
            return self;
        }
        let start = self.resolve(position);
        let offsets = stagger_offsets(specs.len(), amount);
        let mut group_end = start;
        for (offset, spec) in offsets.into_iter().zip(specs) {
            let at = start + offset;
            group_end = group_end.max(at + Self::span(&spec));
            self.entries.push((at, spec));
        }
        self.prev_start = start;
        self.prev_end = group_end;
        self.end = self.end.max(group_end);
        self
    }

    /// Fire `event` when the last entry finishes.
    pub fn on_complete(mut self, event: E) -> Self {
        self.on_complete = Some(event);
        self
    }

    pub fn duration(&self) -> f32 {
        self.end
    }

    pub fn offsets(&self) -> Vec<f32> {
        self.entries.iter().map(|(offset, _)| *offset).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<(f32, TweenSpec<K, E>)>, Option<E>, f32) {
        (self.entries, self.on_complete, self.end)
    }
}
