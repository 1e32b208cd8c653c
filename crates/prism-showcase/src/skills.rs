//! Skill bars of the about section.

use prism_common::{Color, Rect, SceneError};
use prism_motion::{Direction, Ease, OwnerId, Repeat, RevealTrigger, TweenSpec};
use prism_scene::Palette;
use rand::Rng;
use tracing::debug;

use crate::content::Skill;
use crate::stage::{Element, ElementId, ElementProp, Overlay};

/// Seconds between consecutive skills' entrances.
pub const SKILL_STAGGER: f32 = 0.25;
const BAR_DELAY: f32 = 0.25;
const ITEM_RISE: f32 = 10.0;

#[derive(Debug, Clone)]
struct SkillBar {
    level: u8,
    item: ElementId,
    front: ElementId,
    back: ElementId,
}

impl SkillBar {
    fn full_width(&self) -> f32 {
        self.level as f32 * 10.0
    }
}

pub struct SkillBoard {
    owner: OwnerId,
    container: ElementId,
    bars: Vec<SkillBar>,
    trigger: RevealTrigger,
}

/// Gradient for a bar: four tetrad colors for top levels, three above
/// five, otherwise two.
fn bar_gradient(tetrad: &Palette, level: u8, angle: f64) -> Result<String, SceneError> {
    let count = match level {
        l if l > 9 => 4,
        l if l > 5 => 3,
        _ => 2,
    };
    let colors = tetrad.colors().iter().take(count).copied().collect();
    Ok(Palette::from_colors(colors)?.to_css_gradient(angle))
}

impl SkillBoard {
    pub fn new(
        skills: &[&Skill],
        seed: Color,
        angle: f64,
        threshold: f64,
        overlay: &mut Overlay,
        rng: &mut impl Rng,
    ) -> Result<Self, SceneError> {
        let owner = overlay.animator.new_owner();
        let tetrad = Palette::tetrad(seed, rng);
        let container = overlay.stage.add(Element::new("skills").with_alpha(0.0));
        let mut bars = Vec::with_capacity(skills.len());
        for skill in skills {
            let gradient = bar_gradient(&tetrad, skill.level, angle)?;
            let item = overlay
                .stage
                .add(Element::new(skill.title.as_str()).with_alpha(0.0));
            let mut front = Element::new("skill-bar-front").with_background(gradient);
            front.width = 0.0;
            bars.push(SkillBar {
                level: skill.level,
                item,
                front: overlay.stage.add(front),
                back: overlay
                    .stage
                    .add(Element::new("skill-bar-back").with_alpha(0.0)),
            });
        }
        Ok(Self {
            owner,
            container,
            bars,
            trigger: RevealTrigger::new(threshold),
        })
    }

    /// Check the reveal trigger against the list's bounding box.
    pub fn on_scroll(&mut self, rect: Option<&Rect>, viewport_height: f64, overlay: &mut Overlay) -> bool {
        if !self.trigger.check(rect, viewport_height) {
            return false;
        }
        self.animate_in(overlay);
        true
    }

    fn animate_in(&mut self, overlay: &mut Overlay) {
        let animator = &mut overlay.animator;
        animator.add(
            self.owner,
            TweenSpec::new(1.0)
                .from_to((self.container, ElementProp::Alpha), 0.0, 1.0)
                .ease(Ease::QUAD_IN_OUT),
        );
        let bounce = Ease::Bounce(Direction::Out);
        for (i, bar) in self.bars.iter().enumerate() {
            let delay = i as f32 * SKILL_STAGGER;
            animator.add(
                self.owner,
                TweenSpec::new(1.0)
                    .from_to((bar.item, ElementProp::Alpha), 0.0, 1.0)
                    .from_to((bar.item, ElementProp::Y), ITEM_RISE, 0.0)
                    .delay(delay),
            );
            animator.add(
                self.owner,
                TweenSpec::new(1.0)
                    .from_to((bar.front, ElementProp::Width), 0.0, bar.full_width())
                    .ease(bounce)
                    .delay(delay + BAR_DELAY),
            );
            animator.add(
                self.owner,
                TweenSpec::new(1.0)
                    .from_to((bar.back, ElementProp::Alpha), 0.0, 1.0)
                    .ease(bounce)
                    .delay(delay + BAR_DELAY),
            );
        }
        debug!(skills = self.bars.len(), "skill bars revealed");
    }

    /// Pointer entered a skill: the bar dips to half its level and back.
    pub fn hover(&mut self, index: usize, overlay: &mut Overlay) {
        if self.trigger.is_armed() {
            return;
        }
        let Some(bar) = self.bars.get(index) else {
            return;
        };
        let front = bar.front;
        overlay
            .animator
            .kill_matching(|key| *key == (front, ElementProp::Width));
        let half = (bar.level as f32 / 2.0).round() * 10.0;
        overlay.animator.add(
            self.owner,
            TweenSpec::new(0.5)
                .from_to((front, ElementProp::Width), bar.full_width(), half)
                .ease(Ease::QUAD_IN_OUT)
                .yoyo(true)
                .repeat(Repeat::Times(1)),
        );
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn is_revealed(&self) -> bool {
        !self.trigger.is_armed()
    }

    /// Current bar width in percent.
    pub fn bar_width(&self, index: usize, overlay: &Overlay) -> Option<f32> {
        let bar = self.bars.get(index)?;
        overlay.stage.get(bar.front).map(|e| e.width)
    }

    pub fn bar_background(&self, index: usize, overlay: &Overlay) -> Option<String> {
        let bar = self.bars.get(index)?;
        overlay.stage.get(bar.front)?.background.clone()
    }

    pub fn dispose(&mut self, overlay: &mut Overlay) -> usize {
        let killed = overlay.animator.kill_owner(self.owner);
        overlay.stage.remove(self.container);
        for bar in self.bars.drain(..) {
            overlay.stage.remove(bar.item);
            overlay.stage.remove(bar.front);
            overlay.stage.remove(bar.back);
        }
        killed
    }
}
