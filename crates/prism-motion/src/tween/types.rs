use crate::ease::Ease;

/// Handle to a scheduled tween, wander or delayed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenHandle(pub(crate) u64);

/// Scope tag for everything a component schedules.
///
/// `Animator::kill_owner` cancels every tween, wander and delayed call
/// carrying the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerId(pub(crate) u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Once,
    /// Play `n` additional times after the first run.
    Times(u32),
    Infinite,
}

impl Repeat {
    /// GSAP-style count: `-1` is infinite, `0` plays once.
    pub fn from_count(count: i32) -> Self {
        match count {
            c if c < 0 => Repeat::Infinite,
            0 => Repeat::Once,
            c => Repeat::Times(c as u32),
        }
    }

    pub(crate) fn extra_cycles(&self) -> Option<u32> {
        match self {
            Repeat::Once => Some(0),
            Repeat::Times(n) => Some(*n),
            Repeat::Infinite => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Tweens on the same field coexist; the latest scheduled wins each tick.
    #[default]
    None,
    /// On start, remove overlapping fields from other live tweens.
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TrackValues {
    /// Start captured when the delay elapses.
    To { end: f32 },
    /// Start applied on the first tick; end is the value found there.
    From { start: f32 },
    FromTo { start: f32, end: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TrackSpec<K> {
    pub key: K,
    pub values: TrackValues,
}

/// Builder for a single tween.
///
/// ```
/// use prism_motion::{Ease, Repeat, TweenSpec};
///
/// let spin: TweenSpec<&str, ()> = TweenSpec::new(50.0)
///     .to("rotation.y", std::f32::consts::TAU)
///     .ease(Ease::Linear)
///     .repeat(Repeat::Infinite);
/// assert_eq!(spin.duration(), 50.0);
/// ```
#[derive(Debug, Clone)]
pub struct TweenSpec<K, E> {
    pub(crate) tracks: Vec<TrackSpec<K>>,
    pub(crate) duration: f32,
    pub(crate) delay: f32,
    pub(crate) ease: Ease,
    pub(crate) repeat: Repeat,
    pub(crate) yoyo: bool,
    pub(crate) overwrite: Overwrite,
    pub(crate) on_start: Option<E>,
    pub(crate) on_complete: Option<E>,
}

impl<K, E> TweenSpec<K, E> {
    pub fn new(duration: f32) -> Self {
        Self {
            tracks: Vec::new(),
            duration: duration.max(0.0),
            delay: 0.0,
            ease: Ease::Power {
                power: 1,
                dir: crate::ease::Direction::Out,
            },
            repeat: Repeat::Once,
            yoyo: false,
            overwrite: Overwrite::None,
            on_start: None,
            on_complete: None,
        }
    }

    /// Animate `key` from its value at start time to `end`.
    pub fn to(mut self, key: K, end: f32) -> Self {
        self.tracks.push(TrackSpec {
            key,
            values: TrackValues::To { end },
        });
        self
    }

    /// Jump `key` to `start` immediately, then animate back to its current value.
    pub fn from(mut self, key: K, start: f32) -> Self {
        self.tracks.push(TrackSpec {
            key,
            values: TrackValues::From { start },
        });
        self
    }

    pub fn from_to(mut self, key: K, start: f32, end: f32) -> Self {
        self.tracks.push(TrackSpec {
            key,
            values: TrackValues::FromTo { start, end },
        });
        self
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn on_start(mut self, event: E) -> Self {
        self.on_start = Some(event);
        self
    }

    pub fn on_complete(mut self, event: E) -> Self {
        self.on_complete = Some(event);
        self
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn delay_secs(&self) -> f32 {
        self.delay
    }

    /// Delay plus all cycles; `None` when repeating forever.
    pub fn total_duration(&self) -> Option<f32> {
        self.repeat
            .extra_cycles()
            .map(|extra| self.delay + self.duration * (extra + 1) as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_from_gsap_count() {
        assert_eq!(Repeat::from_count(-1), Repeat::Infinite);
        assert_eq!(Repeat::from_count(0), Repeat::Once);
        assert_eq!(Repeat::from_count(3), Repeat::Times(3));
    }

    #[test]
    fn total_duration_counts_cycles() {
        let spec: TweenSpec<u8, ()> = TweenSpec::new(2.0)
            .to(0, 1.0)
            .delay(0.5)
            .repeat(Repeat::Times(2));
        assert_eq!(spec.total_duration(), Some(6.5));

        let forever: TweenSpec<u8, ()> = TweenSpec::new(2.0).repeat(Repeat::Infinite);
        assert_eq!(forever.total_duration(), None);
    }

    #[test]
    fn negative_inputs_clamp_to_zero() {
        let spec: TweenSpec<u8, ()> = TweenSpec::new(-1.0).delay(-3.0);
        assert_eq!(spec.duration(), 0.0);
        assert_eq!(spec.delay_secs(), 0.0);
    }
}
