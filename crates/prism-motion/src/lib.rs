//! Tween and timeline driver for prism.
//!
//! Everything animated on the page goes through an [`Animator`]: eased
//! interpolations with delay, repeat and yoyo, endless [`Wander`] motion,
//! delayed calls, [`Sequence`]s, and the scroll binder built on top of them.

pub mod animator;
pub mod clock;
pub mod ease;
pub mod error;
pub mod reveal;
pub mod scroll;
pub mod sequence;
pub mod tween;
pub mod wander;

pub use animator::{Animatable, Animator};
pub use clock::FrameClock;
pub use ease::{Direction, Ease};
pub use error::MotionError;
pub use reveal::{in_viewport, RevealTrigger};
pub use scroll::{ScrollBinder, ScrollBinding, ScrollMode};
pub use sequence::{stagger_offsets, Position, Sequence};
pub use tween::{OwnerId, Overwrite, Repeat, TweenHandle, TweenSpec};
pub use wander::{Leg, Wander, WanderShape};
