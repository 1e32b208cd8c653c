//! Named easing curves.
//!
//! Names follow the GSAP convention: `family.direction(params)`, e.g.
//! `quad.inOut`, `back.out(1.2)`, `elastic.out(1, 0.3)`. A family without a
//! direction defaults to `out`.

use std::f32::consts::PI;
use std::str::FromStr;

use crate::error::MotionError;

const DEFAULT_OVERSHOOT: f32 = 1.70158;
const DEFAULT_AMPLITUDE: f32 = 1.0;
const DEFAULT_PERIOD: f32 = 0.3;
const DEFAULT_PERIOD_IN_OUT: f32 = 0.45;
/// In-out back curves overshoot harder on each half.
const BACK_IN_OUT_SCALE: f32 = 1.525;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    In,
    #[default]
    Out,
    InOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Ease {
    #[default]
    Linear,
    /// `power1` (quad) through `power4` (quint). The exponent is `power + 1`.
    Power { power: u8, dir: Direction },
    Sine(Direction),
    Back { overshoot: f32, dir: Direction },
    Elastic {
        amplitude: f32,
        period: f32,
        dir: Direction,
    },
    Bounce(Direction),
}

impl Ease {
    pub const QUAD_OUT: Ease = Ease::Power {
        power: 1,
        dir: Direction::Out,
    };
    pub const QUAD_IN_OUT: Ease = Ease::Power {
        power: 1,
        dir: Direction::InOut,
    };

    pub fn back(dir: Direction) -> Self {
        Ease::Back {
            overshoot: DEFAULT_OVERSHOOT,
            dir,
        }
    }

    /// Map linear progress `p` in `[0, 1]` through the curve.
    ///
    /// Endpoints are exact: `apply(0) == 0` and `apply(1) == 1`.
    pub fn apply(&self, p: f32) -> f32 {
        if p <= 0.0 {
            return 0.0;
        }
        if p >= 1.0 {
            return 1.0;
        }
        match *self {
            Ease::Linear => p,
            Ease::Power { power, dir } => {
                let exp = power as i32 + 1;
                directed(dir, p, |t| t.powi(exp))
            }
            Ease::Sine(dir) => match dir {
                Direction::In => 1.0 - (p * PI / 2.0).cos(),
                Direction::Out => (p * PI / 2.0).sin(),
                Direction::InOut => -((PI * p).cos() - 1.0) / 2.0,
            },
            Ease::Back { overshoot, dir } => {
                let s = if dir == Direction::InOut {
                    overshoot * BACK_IN_OUT_SCALE
                } else {
                    overshoot
                };
                directed(dir, p, |t| t * t * ((s + 1.0) * t - s))
            }
            Ease::Elastic {
                amplitude,
                period,
                dir,
            } => elastic(amplitude, period, dir, p),
            Ease::Bounce(dir) => match dir {
                Direction::In => 1.0 - bounce_out(1.0 - p),
                Direction::Out => bounce_out(p),
                Direction::InOut => {
                    if p < 0.5 {
                        (1.0 - bounce_out(1.0 - 2.0 * p)) / 2.0
                    } else {
                        (1.0 + bounce_out(2.0 * p - 1.0)) / 2.0
                    }
                }
            },
        }
    }
}

/// Build the out and in-out variants from an "in" curve.
fn directed(dir: Direction, p: f32, ease_in: impl Fn(f32) -> f32) -> f32 {
    match dir {
        Direction::In => ease_in(p),
        Direction::Out => 1.0 - ease_in(1.0 - p),
        Direction::InOut => {
            if p < 0.5 {
                ease_in(p * 2.0) / 2.0
            } else {
                1.0 - ease_in((1.0 - p) * 2.0) / 2.0
            }
        }
    }
}

fn elastic(amplitude: f32, period: f32, dir: Direction, p: f32) -> f32 {
    let amplitude = amplitude.max(1.0);
    let phase = period / (2.0 * PI) * (1.0 / amplitude).asin();
    let out = |t: f32| {
        amplitude * 2f32.powf(-10.0 * t) * ((t - phase) * (2.0 * PI) / period).sin() + 1.0
    };
    match dir {
        Direction::Out => out(p),
        Direction::In => 1.0 - out(1.0 - p),
        Direction::InOut => {
            if p < 0.5 {
                (1.0 - out(1.0 - 2.0 * p)) / 2.0
            } else {
                out(2.0 * p - 1.0) / 2.0 + 0.5
            }
        }
    }
}

fn bounce_out(p: f32) -> f32 {
    const N: f32 = 7.5625;
    const D: f32 = 2.75;
    if p < 1.0 / D {
        N * p * p
    } else if p < 2.0 / D {
        let t = p - 1.5 / D;
        N * t * t + 0.75
    } else if p < 2.5 / D {
        let t = p - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = p - 2.625 / D;
        N * t * t + 0.984375
    }
}

impl FromStr for Ease {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, params) = match s.find('(') {
            Some(open) => {
                let inner = s[open + 1..]
                    .strip_suffix(')')
                    .ok_or_else(|| MotionError::InvalidEaseParam(s.to_string()))?;
                let params = inner
                    .split(',')
                    .filter(|p| !p.trim().is_empty())
                    .map(|p| p.trim().parse::<f32>())
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|_| MotionError::InvalidEaseParam(s.to_string()))?;
                if params.iter().any(|p| !p.is_finite()) {
                    return Err(MotionError::InvalidEaseParam(s.to_string()));
                }
                (&s[..open], params)
            }
            None => (s, Vec::new()),
        };

        let (family, dir) = match name.split_once('.') {
            Some((family, dir)) => {
                let dir = match dir {
                    "in" => Direction::In,
                    "out" => Direction::Out,
                    "inOut" => Direction::InOut,
                    _ => return Err(MotionError::UnknownEase(s.to_string())),
                };
                (family, dir)
            }
            None => (name, Direction::Out),
        };

        let ease = match family {
            "none" | "linear" => Ease::Linear,
            "quad" | "power1" => Ease::Power { power: 1, dir },
            "cubic" | "power2" => Ease::Power { power: 2, dir },
            "power3" => Ease::Power { power: 3, dir },
            "power4" => Ease::Power { power: 4, dir },
            "sine" => Ease::Sine(dir),
            "bounce" => Ease::Bounce(dir),
            "back" => Ease::Back {
                overshoot: params.first().copied().unwrap_or(DEFAULT_OVERSHOOT),
                dir,
            },
            "elastic" => {
                let period = params.get(1).copied().unwrap_or(if dir == Direction::InOut {
                    DEFAULT_PERIOD_IN_OUT
                } else {
                    DEFAULT_PERIOD
                });
                if period <= 0.0 {
                    return Err(MotionError::InvalidEaseParam(s.to_string()));
                }
                Ease::Elastic {
                    amplitude: params.first().copied().unwrap_or(DEFAULT_AMPLITUDE),
                    period,
                    dir,
                }
            }
            _ => return Err(MotionError::UnknownEase(s.to_string())),
        };
        Ok(ease)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ease(name: &str) -> Ease {
        name.parse().unwrap()
    }

    #[test]
    fn parses_gsap_names() {
        assert_eq!(ease("none"), Ease::Linear);
        assert_eq!(ease("quad.out"), Ease::QUAD_OUT);
        assert_eq!(ease("quad.inOut"), Ease::QUAD_IN_OUT);
        assert_eq!(ease("power2.in"), ease("cubic.in"));
        assert_eq!(ease("bounce"), Ease::Bounce(Direction::Out));
        assert_eq!(
            ease("back.out(1.2)"),
            Ease::Back {
                overshoot: 1.2,
                dir: Direction::Out
            }
        );
    }

    #[test]
    fn rejects_unknown_names() {
        assert!(matches!(
            "wobble.out".parse::<Ease>(),
            Err(MotionError::UnknownEase(_))
        ));
        assert!(matches!(
            "quad.sideways".parse::<Ease>(),
            Err(MotionError::UnknownEase(_))
        ));
        assert!(matches!(
            "back.out(abc)".parse::<Ease>(),
            Err(MotionError::InvalidEaseParam(_))
        ));
    }

    #[test]
    fn rejects_degenerate_elastic_period() {
        for name in ["elastic.out(1, 0)", "elastic.in(1, -0.3)", "elastic.out(1, inf)", "back.out(NaN)"] {
            assert!(
                matches!(name.parse::<Ease>(), Err(MotionError::InvalidEaseParam(_))),
                "{name}"
            );
        }
        assert!(ease("elastic.out(1, 0.3)").apply(0.5).is_finite());
    }

    #[test]
    fn back_in_out_scales_overshoot() {
        let e = ease("back.inOut");
        assert!((e.apply(0.25) + 0.099_68).abs() < 1e-4);
        assert!((e.apply(0.5) - 0.5).abs() < 1e-6);
        assert!(e.apply(0.9) > 1.0);
    }

    #[test]
    fn endpoints_are_exact() {
        for name in [
            "none",
            "quad.in",
            "cubic.inOut",
            "sine.inOut",
            "back.out",
            "elastic.out",
            "elastic.inOut",
            "bounce.inOut",
        ] {
            let e = ease(name);
            assert_eq!(e.apply(0.0), 0.0, "{name} at 0");
            assert_eq!(e.apply(1.0), 1.0, "{name} at 1");
        }
    }

    #[test]
    fn in_out_is_half_at_midpoint() {
        for name in ["quad.inOut", "cubic.inOut", "sine.inOut", "bounce.inOut"] {
            assert!((ease(name).apply(0.5) - 0.5).abs() < 1e-4, "{name}");
        }
    }

    #[test]
    fn quad_values() {
        assert!((ease("quad.in").apply(0.5) - 0.25).abs() < 1e-6);
        assert!((ease("quad.out").apply(0.5) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| ease("back.out").apply(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn bounce_out_stays_in_unit_range() {
        for i in 0..=100 {
            let v = ease("bounce.out").apply(i as f32 / 100.0);
            assert!((0.0..=1.0 + 1e-5).contains(&v));
        }
    }

    #[test]
    fn out_of_range_progress_clamps() {
        assert_eq!(ease("quad.out").apply(-0.5), 0.0);
        assert_eq!(ease("quad.out").apply(2.0), 1.0);
    }
}
