//! Endless random motion, produced lazily one leg at a time.
//!
//! A [`Wander`] replaces "tween, then reschedule from the completion
//! callback" chains: the animator pulls the next leg when the current one
//! ends, and the whole chain dies with its owner.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How each leg of a wander is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WanderShape {
    /// `points` waypoints per leg, every axis uniform in `[-range/2, range/2]`.
    /// Leg duration is `speed + rand * 5 * speed`.
    Path { range: f32, points: usize, speed: f32 },
    /// One target per leg shared by every axis, uniform in `[min, min + spread]`,
    /// reached over `duration_min + rand * duration_spread` seconds.
    Uniform {
        min: f32,
        spread: f32,
        duration_min: f32,
        duration_spread: f32,
    },
}

/// One leg of a wander: waypoints (each with one value per key) and duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub points: Vec<Vec<f32>>,
    pub duration: f32,
}

/// Restartable infinite sequence of [`Leg`]s.
#[derive(Debug, Clone)]
pub struct Wander {
    shape: WanderShape,
    dims: usize,
    seed: u64,
    rng: StdRng,
}

impl Wander {
    pub fn new(shape: WanderShape, dims: usize, seed: u64) -> Self {
        Self {
            shape,
            dims,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Waypoint path over three position axes.
    pub fn path(range: f32, speed: f32, seed: u64) -> Self {
        Self::new(
            WanderShape::Path {
                range,
                points: 3,
                speed,
            },
            3,
            seed,
        )
    }

    pub fn shape(&self) -> WanderShape {
        self.shape
    }

    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Rewind to the first leg.
    pub fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}

impl Iterator for Wander {
    type Item = Leg;

    fn next(&mut self) -> Option<Leg> {
        let leg = match self.shape {
            WanderShape::Path {
                range,
                points,
                speed,
            } => {
                let points = (0..points.max(1))
                    .map(|_| {
                        (0..self.dims)
                            .map(|_| -(range / 2.0) + self.rng.gen::<f32>() * range)
                            .collect()
                    })
                    .collect();
                Leg {
                    points,
                    duration: speed + self.rng.gen::<f32>() * 5.0 * speed,
                }
            }
            WanderShape::Uniform {
                min,
                spread,
                duration_min,
                duration_spread,
            } => {
                let value = min + self.rng.gen::<f32>() * spread;
                Leg {
                    points: vec![vec![value; self.dims]],
                    duration: duration_min + self.rng.gen::<f32>() * duration_spread,
                }
            }
        };
        Some(leg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_legs_stay_in_range() {
        let wander = Wander::path(250.0, 10.0, 7);
        for leg in wander.take(50) {
            assert_eq!(leg.points.len(), 3);
            for point in &leg.points {
                assert_eq!(point.len(), 3);
                assert!(point.iter().all(|v| (-125.0..=125.0).contains(v)));
            }
            assert!((10.0..=60.0).contains(&leg.duration));
        }
    }

    #[test]
    fn uniform_legs_share_value_across_axes() {
        let wander = Wander::new(
            WanderShape::Uniform {
                min: 2.0,
                spread: 3.0,
                duration_min: 1.0,
                duration_spread: 10.0,
            },
            3,
            11,
        );
        for leg in wander.take(20) {
            assert_eq!(leg.points.len(), 1);
            let p = &leg.points[0];
            assert!(p.iter().all(|v| *v == p[0]));
            assert!((2.0..=5.0).contains(&p[0]));
            assert!((1.0..=11.0).contains(&leg.duration));
        }
    }

    #[test]
    fn restart_replays_the_same_legs() {
        let mut wander = Wander::path(150.0, 2.0, 99);
        let first: Vec<Leg> = wander.by_ref().take(3).collect();
        wander.restart();
        let again: Vec<Leg> = wander.take(3).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn never_runs_dry() {
        let mut wander = Wander::path(10.0, 100.0, 1);
        assert!(wander.nth(1000).is_some());
    }
}
