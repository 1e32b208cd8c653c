//! The tween driver.
//!
//! An [`Animator`] owns every live tween, wander and delayed call of one
//! surface. Each frame, [`Animator::tick`] advances them in insertion
//! order against an [`Animatable`] target, so the last scheduled tween on
//! a field wins, and returns the events that fired.

mod path;


use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, warn};

use crate::ease::Ease;
use crate::sequence::Sequence;
use crate::tween::{OwnerId, Overwrite, Repeat, TrackSpec, TrackValues, TweenHandle, TweenSpec};
use crate::wander::Wander;
use path::Polyline;

/// Anything whose numeric fields can be read and written by key.
///
/// `get` returns `None` when the field no longer exists (e.g. the node was
/// removed); tweens on such fields are dropped silently.
pub trait Animatable<K> {
    fn get(&self, key: K) -> Option<f32>;
    fn set(&mut self, key: K, value: f32);
}

impl<K: Copy + Eq + Hash> Animatable<K> for HashMap<K, f32> {
    fn get(&self, key: K) -> Option<f32> {
        HashMap::get(self, &key).copied()
    }

    fn set(&mut self, key: K, value: f32) {
        self.insert(key, value);
    }
}

#[derive(Debug)]
struct Track<K> {
    key: K,
    values: TrackValues,
    start: f32,
    end: f32,
}

#[derive(Debug)]
enum Motion<K> {
    Tracks(Vec<Track<K>>),
    Path {
        keys: Vec<K>,
        /// Waypoints after the start point, which is captured on start.
        waypoints: Vec<Vec<f32>>,
        line: Option<Polyline>,
        wander: Option<Wander>,
    },
    Call,
}

impl<K: Copy + PartialEq> Motion<K> {
    fn touches(&self, keys: &[K]) -> bool {
        match self {
            Motion::Tracks(tracks) => tracks.iter().any(|t| keys.contains(&t.key)),
            Motion::Path { keys: own, .. } => own.iter().any(|k| keys.contains(k)),
            Motion::Call => false,
        }
    }

    fn keys(&self) -> Vec<K> {
        match self {
            Motion::Tracks(tracks) => tracks.iter().map(|t| t.key).collect(),
            Motion::Path { keys, .. } => keys.clone(),
            Motion::Call => Vec::new(),
        }
    }

    /// Remove `keys` from this motion. Returns `true` if nothing is left.
    fn remove_keys(&mut self, keys: &[K]) -> bool {
        match self {
            Motion::Tracks(tracks) => {
                tracks.retain(|t| !keys.contains(&t.key));
                tracks.is_empty()
            }
            Motion::Path { keys: own, .. } => own.iter().any(|k| keys.contains(k)),
            Motion::Call => false,
        }
    }
}

#[derive(Debug)]
struct Tween<K, E> {
    handle: TweenHandle,
    owner: OwnerId,
    motion: Motion<K>,
    duration: f32,
    delay: f32,
    ease: Ease,
    repeat: Repeat,
    yoyo: bool,
    overwrite: Overwrite,
    elapsed: f32,
    primed: bool,
    started: bool,
    done: bool,
    on_start: Option<E>,
    on_complete: Option<E>,
}

impl<K: Copy + PartialEq + Debug, E> Tween<K, E> {
    /// Apply `from` start values; runs on the first tick, before the delay.
    fn prime<T: Animatable<K> + ?Sized>(&mut self, target: &mut T) {
        self.primed = true;
        if let Motion::Tracks(tracks) = &mut self.motion {
            tracks.retain_mut(|track| match track.values {
                TrackValues::From { start } => match target.get(track.key) {
                    Some(current) => {
                        track.start = start;
                        track.end = current;
                        target.set(track.key, start);
                        true
                    }
                    None => false,
                },
                TrackValues::FromTo { start, end } => {
                    track.start = start;
                    track.end = end;
                    target.set(track.key, start);
                    true
                }
                TrackValues::To { .. } => true,
            });
        }
    }

    /// Capture lazy start values once the delay has elapsed.
    fn capture<T: Animatable<K> + ?Sized>(&mut self, target: &T) {
        match &mut self.motion {
            Motion::Tracks(tracks) => {
                let had_tracks = !tracks.is_empty();
                tracks.retain_mut(|track| match track.values {
                    TrackValues::To { end } => match target.get(track.key) {
                        Some(current) => {
                            track.start = current;
                            track.end = end;
                            true
                        }
                        None => false,
                    },
                    _ => true,
                });
                if had_tracks && tracks.is_empty() {
                    self.done = true;
                    self.on_complete = None;
                }
            }
            Motion::Path {
                keys,
                waypoints,
                line,
                wander,
            } => {
                if let Some(leg) = wander.as_mut().and_then(|w| w.next()) {
                    *waypoints = leg.points;
                    self.duration = leg.duration;
                }
                match current_point(keys, target) {
                    Some(start) => {
                        let mut points = Vec::with_capacity(waypoints.len() + 1);
                        points.push(start);
                        points.extend(waypoints.iter().cloned());
                        *line = Some(Polyline::new(points));
                    }
                    None => {
                        self.done = true;
                        self.on_complete = None;
                    }
                }
            }
            Motion::Call => {}
        }
    }

    fn render<T: Animatable<K> + ?Sized>(&self, eased: f32, target: &mut T) {
        match &self.motion {
            Motion::Tracks(tracks) => {
                for track in tracks {
                    target.set(track.key, lerp(track.start, track.end, eased));
                }
            }
            Motion::Path {
                keys,
                line: Some(line),
                ..
            } => {
                for (key, value) in keys.iter().zip(line.sample(eased)) {
                    target.set(*key, value);
                }
            }
            _ => {}
        }
    }

    /// Advance the clock by `dt`, prime `from` values and capture lazy
    /// starts. Returns `true` on the tick the tween starts.
    fn begin<T: Animatable<K> + ?Sized>(
        &mut self,
        dt: f32,
        target: &mut T,
        events: &mut Vec<E>,
    ) -> bool {
        if self.done {
            return false;
        }
        if !self.primed {
            self.prime(target);
        }

        self.elapsed += dt;
        if self.elapsed < self.delay || self.started {
            return false;
        }

        self.started = true;
        self.capture(target);
        if self.done {
            return false;
        }
        if let Some(event) = self.on_start.take() {
            events.push(event);
        }
        true
    }

    /// Write this tick's value. Only runs after every tween has begun.
    fn step<T: Animatable<K> + ?Sized>(&mut self, target: &mut T, events: &mut Vec<E>) {
        if self.done || !self.started {
            return;
        }

        let local = self.elapsed - self.delay;
        let extra = self.repeat.extra_cycles();
        let (cycle, progress, finished) = if self.duration <= 0.0 {
            (extra.unwrap_or(0) as u64, 1.0, true)
        } else {
            let cycle = (local / self.duration).floor() as u64;
            match extra {
                Some(n) if local >= self.duration * (n + 1) as f32 => (n as u64, 1.0, true),
                _ => (
                    cycle,
                    (local - cycle as f32 * self.duration) / self.duration,
                    false,
                ),
            }
        };

        let progress = if self.yoyo && cycle % 2 == 1 {
            1.0 - progress
        } else {
            progress
        };
        self.render(self.ease.apply(progress), target);

        if finished {
            if let Motion::Path {
                wander: Some(_), ..
            } = &self.motion
            {
                // Next leg starts from wherever this one ended.
                self.elapsed = self.delay;
                self.capture(target);
            } else {
                self.done = true;
                if let Some(event) = self.on_complete.take() {
                    events.push(event);
                }
            }
        }
    }
}

/// Exact at both ends, unlike `a + (b - a) * t`.
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

fn current_point<K: Copy, T: Animatable<K> + ?Sized>(keys: &[K], target: &T) -> Option<Vec<f32>> {
    keys.iter().map(|k| target.get(*k)).collect()
}

/// Drives every tween of one surface.
pub struct Animator<K, E> {
    tweens: Vec<Tween<K, E>>,
    next_handle: u64,
    next_owner: u32,
}

impl<K, E> Default for Animator<K, E> {
    fn default() -> Self {
        Self {
            tweens: Vec::new(),
            next_handle: 0,
            next_owner: 0,
        }
    }
}

impl<K: Copy + PartialEq + Debug, E> Animator<K, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh owner tag for a component.
    pub fn new_owner(&mut self) -> OwnerId {
        self.next_owner += 1;
        OwnerId(self.next_owner)
    }

    fn push(
        &mut self,
        owner: OwnerId,
        motion: Motion<K>,
        spec_parts: SpecParts<E>,
    ) -> TweenHandle {
        self.next_handle += 1;
        let handle = TweenHandle(self.next_handle);
        self.tweens.push(Tween {
            handle,
            owner,
            motion,
            duration: spec_parts.duration,
            delay: spec_parts.delay,
            ease: spec_parts.ease,
            repeat: spec_parts.repeat,
            yoyo: spec_parts.yoyo,
            overwrite: spec_parts.overwrite,
            elapsed: 0.0,
            primed: false,
            started: false,
            done: false,
            on_start: spec_parts.on_start,
            on_complete: spec_parts.on_complete,
        });
        handle
    }

    /// Schedule a tween.
    pub fn add(&mut self, owner: OwnerId, spec: TweenSpec<K, E>) -> TweenHandle {
        let tracks = spec
            .tracks
            .iter()
            .map(|TrackSpec { key, values }| Track {
                key: *key,
                values: *values,
                start: 0.0,
                end: 0.0,
            })
            .collect();
        self.push(owner, Motion::Tracks(tracks), SpecParts::from(spec))
    }

    /// Move `keys` through `waypoints`, starting from their current values.
    pub fn path(
        &mut self,
        owner: OwnerId,
        keys: Vec<K>,
        waypoints: Vec<Vec<f32>>,
        duration: f32,
        ease: Ease,
    ) -> TweenHandle {
        let motion = Motion::Path {
            keys,
            waypoints,
            line: None,
            wander: None,
        };
        let parts = SpecParts {
            duration: duration.max(0.0),
            ease,
            ..SpecParts::default()
        };
        self.push(owner, motion, parts)
    }

    /// Drive `keys` forever through the legs of `wander`.
    pub fn wander(&mut self, owner: OwnerId, keys: Vec<K>, wander: Wander, ease: Ease) -> TweenHandle {
        if keys.len() != wander.dims() {
            warn!(
                keys = keys.len(),
                dims = wander.dims(),
                "wander dimension mismatch; extra values are ignored"
            );
        }
        let motion = Motion::Path {
            keys,
            waypoints: Vec::new(),
            line: None,
            wander: Some(wander),
        };
        let parts = SpecParts {
            ease,
            ..SpecParts::default()
        };
        self.push(owner, motion, parts)
    }

    /// Fire `event` after `delay` seconds.
    pub fn delayed_call(&mut self, owner: OwnerId, delay: f32, event: E) -> TweenHandle {
        let parts = SpecParts {
            duration: 0.0,
            delay: delay.max(0.0),
            on_complete: Some(event),
            ..SpecParts::default()
        };
        self.push(owner, Motion::Call, parts)
    }

    /// Schedule every entry of a sequence, offset by its position.
    pub fn play(&mut self, owner: OwnerId, sequence: Sequence<K, E>) -> Vec<TweenHandle> {
        let (entries, on_complete, end) = sequence.into_parts();
        let mut handles: Vec<TweenHandle> = entries
            .into_iter()
            .map(|(offset, spec)| {
                let delay = spec.delay + offset;
                self.add(owner, spec.delay(delay))
            })
            .collect();
        if let Some(event) = on_complete {
            handles.push(self.delayed_call(owner, end, event));
        }
        handles
    }

    pub fn kill(&mut self, handle: TweenHandle) -> bool {
        let before = self.tweens.len();
        self.tweens.retain(|t| t.handle != handle);
        self.tweens.len() != before
    }

    /// Cancel everything `owner` scheduled. Returns how many were live.
    pub fn kill_owner(&mut self, owner: OwnerId) -> usize {
        let before = self.tweens.len();
        self.tweens.retain(|t| t.owner != owner);
        let killed = before - self.tweens.len();
        if killed > 0 {
            debug!(owner = owner.0, killed, "killed owner tweens");
        }
        killed
    }

    /// Cancel every tween touching a key that matches `pred`.
    pub fn kill_matching(&mut self, pred: impl Fn(&K) -> bool) -> usize {
        let before = self.tweens.len();
        self.tweens
            .retain(|t| !t.motion.keys().iter().any(|k| pred(k)));
        before - self.tweens.len()
    }

    pub fn is_active(&self, handle: TweenHandle) -> bool {
        self.tweens.iter().any(|t| t.handle == handle && !t.done)
    }

    pub fn is_animating(&self, key: K) -> bool {
        self.tweens
            .iter()
            .any(|t| !t.done && t.motion.touches(&[key]))
    }

    /// Number of live tweens, wanders and delayed calls.
    pub fn live_handles(&self) -> usize {
        self.tweens.iter().filter(|t| !t.done).count()
    }

    pub fn live_for(&self, owner: OwnerId) -> usize {
        self.tweens
            .iter()
            .filter(|t| !t.done && t.owner == owner)
            .count()
    }

    /// Advance everything by `dt` seconds and return the events that fired.
    pub fn tick<T: Animatable<K> + ?Sized>(&mut self, dt: f32, target: &mut T) -> Vec<E> {
        let mut events = Vec::new();
        let dt = dt.max(0.0);

        // Every start is captured from the pre-tick values before anything
        // renders, so the last scheduled tween on a field wins.
        for i in 0..self.tweens.len() {
            let started = self.tweens[i].begin(dt, target, &mut events);
            if started && self.tweens[i].overwrite == Overwrite::Auto {
                let keys = self.tweens[i].motion.keys();
                self.overwrite(i, &keys);
            }
        }
        for tween in &mut self.tweens {
            tween.step(target, &mut events);
        }

        self.tweens.retain(|t| !t.done);
        events
    }

    /// Strip `keys` from every other running tween; drop the emptied ones.
    fn overwrite(&mut self, winner: usize, keys: &[K]) {
        if keys.is_empty() {
            return;
        }
        for (j, tween) in self.tweens.iter_mut().enumerate() {
            if j == winner || tween.done || !tween.started || !tween.motion.touches(keys) {
                continue;
            }
            if tween.motion.remove_keys(keys) {
                tween.done = true;
                tween.on_complete = None;
            }
        }
    }
}

struct SpecParts<E> {
    duration: f32,
    delay: f32,
    ease: Ease,
    repeat: Repeat,
    yoyo: bool,
    overwrite: Overwrite,
    on_start: Option<E>,
    on_complete: Option<E>,
}

impl<E> Default for SpecParts<E> {
    fn default() -> Self {
        Self {
            duration: 0.0,
            delay: 0.0,
            ease: Ease::Linear,
            repeat: Repeat::Once,
            yoyo: false,
            overwrite: Overwrite::None,
            on_start: None,
            on_complete: None,
        }
    }
}

impl<K, E> From<TweenSpec<K, E>> for SpecParts<E> {
    fn from(spec: TweenSpec<K, E>) -> Self {
        Self {
            duration: spec.duration,
            delay: spec.delay,
            ease: spec.ease,
            repeat: spec.repeat,
            yoyo: spec.yoyo,
            overwrite: spec.overwrite,
            on_start: spec.on_start,
            on_complete: spec.on_complete,
        }
    }
}
