//! Staggered fade-ins for the showcase's text and list items.

use prism_config::schema::EntranceConfig;
use prism_motion::{Direction, Ease, Position, Sequence, TweenSpec};

use crate::stage::{ElementId, ElementKey, ElementProp, StageEvent};

/// Detail view entrance: every item fades in, spread over `stagger`
/// seconds after `delay`. [`Sequence::duration`] is when the last one lands.
pub fn entrance(items: &[ElementId], config: &EntranceConfig) -> Sequence<ElementKey, StageEvent> {
    let specs = items
        .iter()
        .map(|&item| {
            TweenSpec::new(config.duration)
                .from_to((item, ElementProp::Alpha), 0.0, 1.0)
                .ease(Ease::QUAD_IN_OUT)
        })
        .collect();
    Sequence::new().stagger(specs, config.stagger, Position::At(config.delay))
}

/// First appearance of the showcase section: the container fades in over
/// a second, then the grid items bounce in.
pub fn mount_reveal(container: ElementId, items: &[ElementId]) -> Sequence<ElementKey, StageEvent> {
    let fade = TweenSpec::new(1.0)
        .from_to((container, ElementProp::Alpha), 0.0, 1.0)
        .ease(Ease::QUAD_IN_OUT);
    let specs = items
        .iter()
        .map(|&item| {
            TweenSpec::new(1.0)
                .from_to((item, ElementProp::Alpha), 0.0, 1.0)
                .ease(Ease::Bounce(Direction::Out))
        })
        .collect();
    Sequence::new()
        .add(fade, Position::At(0.0))
        .stagger(specs, 0.5, Position::At(0.5))
}
