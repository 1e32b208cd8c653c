//! Rotating gradient backdrop.
//!
//! Every few seconds a fresh palette is drawn as a new gradient layer on
//! top; the layers below fade out and are removed once invisible.

use prism_common::{Color, SceneError};
use prism_config::schema::BackdropConfig;
use prism_motion::{OwnerId, TweenSpec, Ease};
use prism_scene::Palette;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::stage::{Element, ElementId, ElementProp, Overlay, StageEvent};

/// `base_colors` random hues, or with probability `even_chance` an evenly
/// spaced palette with up to `max_extra_colors` more.
pub fn choose_palette(
    config: &BackdropConfig,
    seed: Color,
    rng: &mut impl Rng,
) -> Result<Palette, SceneError> {
    let base = config.base_colors as usize;
    if rng.gen::<f64>() < config.even_chance {
        let extra = (rng.gen::<f32>() * config.max_extra_colors as f32).round() as usize;
        Palette::evenly_spaced(seed, base + extra, rng)
    } else {
        Palette::random(seed, base, rng)
    }
}

pub struct GradientBackdrop {
    config: BackdropConfig,
    seed: Color,
    angle: f64,
    rng: StdRng,
    owner: OwnerId,
    /// Front layer first.
    layers: Vec<ElementId>,
    fading: Vec<ElementId>,
    redraws: u32,
}

impl GradientBackdrop {
    /// Draw the first palette and schedule the next change.
    pub fn start(
        config: &BackdropConfig,
        seed: Color,
        angle: f64,
        overlay: &mut Overlay,
        rng_seed: u64,
    ) -> Result<Self, SceneError> {
        let owner = overlay.animator.new_owner();
        let mut backdrop = Self {
            config: config.clone(),
            seed,
            angle,
            rng: StdRng::seed_from_u64(rng_seed),
            owner,
            layers: Vec::new(),
            fading: Vec::new(),
            redraws: 0,
        };
        backdrop.redraw(overlay)?;
        Ok(backdrop)
    }

    fn redraw(&mut self, overlay: &mut Overlay) -> Result<(), SceneError> {
        let palette = choose_palette(&self.config, self.seed, &mut self.rng)?;
        let gradient = palette.to_css_gradient(self.angle);

        for &layer in &self.layers {
            if self.fading.contains(&layer) {
                continue;
            }
            overlay.animator.add(
                self.owner,
                TweenSpec::new(self.config.fade_duration)
                    .from_to((layer, ElementProp::Alpha), 1.0, 0.0)
                    .ease(Ease::QUAD_IN_OUT)
                    .on_complete(StageEvent::LayerFaded(layer)),
            );
            self.fading.push(layer);
        }

        let layer = overlay.stage.add(Element::new("gradient").with_background(gradient.as_str()));
        self.layers.insert(0, layer);

        let wait = self.config.interval_min + self.rng.gen::<f32>() * self.config.interval_spread;
        overlay
            .animator
            .delayed_call(self.owner, wait, StageEvent::BackdropRedraw);
        self.redraws += 1;
        debug!(colors = palette.len(), next_in = wait, %gradient, "backdrop redrawn");
        Ok(())
    }

    /// Returns `true` if the event belonged to the backdrop.
    pub fn handle(&mut self, event: StageEvent, overlay: &mut Overlay) -> Result<bool, SceneError> {
        match event {
            StageEvent::LayerFaded(layer) if self.layers.contains(&layer) => {
                self.layers.retain(|l| *l != layer);
                self.fading.retain(|l| *l != layer);
                overlay.stage.remove(layer);
                Ok(true)
            }
            StageEvent::BackdropRedraw => {
                self.redraw(overlay)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn layers(&self) -> &[ElementId] {
        &self.layers
    }

    pub fn front(&self) -> Option<ElementId> {
        self.layers.first().copied()
    }

    pub fn redraws(&self) -> u32 {
        self.redraws
    }

    /// Cancel the fade and redraw chain and remove every layer.
    pub fn dispose(&mut self, overlay: &mut Overlay) -> usize {
        let killed = overlay.animator.kill_owner(self.owner);
        for layer in self.layers.drain(..) {
            overlay.stage.remove(layer);
        }
        self.fading.clear();
        killed
    }
}
