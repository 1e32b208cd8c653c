//! Tween descriptions: what to animate, for how long, and how.

mod types;

pub use types::*;
