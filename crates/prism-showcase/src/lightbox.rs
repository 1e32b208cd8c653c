//! Full-size image viewer.
//!
//! Two stacked image layers. Stepping crossfades between them: the
//! outgoing layer fades out while sliding away from the step direction and
//! the incoming one fades in, then the layers swap roles.

use prism_config::schema::LightboxConfig;
use prism_motion::{Ease, OwnerId, TweenSpec};
use tracing::debug;

use crate::navigator::Step;
use crate::stage::{Element, ElementId, ElementProp, Overlay, StageEvent};

pub struct Lightbox {
    config: LightboxConfig,
    owner: OwnerId,
    front: ElementId,
    back: ElementId,
}

impl Lightbox {
    pub fn open(url: &str, config: &LightboxConfig, overlay: &mut Overlay) -> Self {
        let owner = overlay.animator.new_owner();
        let front = overlay
            .stage
            .add(Element::new("lightbox-front").with_source(url));
        let back = overlay
            .stage
            .add(Element::new("lightbox-back").with_alpha(0.0));
        debug!(url, "lightbox opened");
        Self {
            config: config.clone(),
            owner,
            front,
            back,
        }
    }

    /// Crossfade to `url`. Fires [`StageEvent::LightboxSettled`] when done.
    pub fn crossfade(&mut self, url: &str, step: Step, overlay: &mut Overlay) {
        // A crossfade still running is cut short.
        overlay.animator.kill_owner(self.owner);

        let outgoing = self.front;
        let incoming = self.back;
        if let Some(element) = overlay.stage.get_mut(incoming) {
            element.source = Some(url.to_string());
            element.x = 0.0;
        }
        let slide = match step {
            Step::Next => -self.config.slide_distance,
            Step::Prev => self.config.slide_distance,
        };
        let duration = self.config.duration;
        overlay.animator.add(
            self.owner,
            TweenSpec::new(duration)
                .from_to((outgoing, ElementProp::Alpha), 1.0, 0.0)
                .from_to((outgoing, ElementProp::X), 0.0, slide)
                .ease(Ease::QUAD_IN_OUT),
        );
        overlay.animator.add(
            self.owner,
            TweenSpec::new(duration)
                .from_to((incoming, ElementProp::Alpha), 0.0, 1.0)
                .ease(Ease::QUAD_IN_OUT)
                .on_complete(StageEvent::LightboxSettled),
        );
        self.front = incoming;
        self.back = outgoing;
    }

    /// The layer showing the current image.
    pub fn front(&self) -> ElementId {
        self.front
    }

    pub fn back(&self) -> ElementId {
        self.back
    }

    pub fn source<'a>(&self, overlay: &'a Overlay) -> Option<&'a str> {
        overlay.stage.get(self.front)?.source.as_deref()
    }

    pub fn close(self, overlay: &mut Overlay) {
        overlay.animator.kill_owner(self.owner);
        overlay.stage.remove(self.front);
        overlay.stage.remove(self.back);
        debug!("lightbox closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LightboxConfig {
        LightboxConfig::default()
    }

    #[test]
    fn open_shows_front_layer_only() {
        let mut overlay = Overlay::new();
        let lightbox = Lightbox::open("a.png", &config(), &mut overlay);
        assert_eq!(overlay.stage.alpha(lightbox.front()), Some(1.0));
        assert_eq!(overlay.stage.alpha(lightbox.back()), Some(0.0));
        assert_eq!(lightbox.source(&overlay), Some("a.png"));
    }

    #[test]
    fn crossfade_swaps_layers_and_slides_direction_aware() {
        let mut overlay = Overlay::new();
        let mut lightbox = Lightbox::open("a.png", &config(), &mut overlay);
        let first = lightbox.front();

        lightbox.crossfade("b.png", Step::Next, &mut overlay);
        assert_ne!(lightbox.front(), first);
        assert_eq!(lightbox.source(&overlay), Some("b.png"));

        let mut events = Vec::new();
        for _ in 0..5 {
            events.extend(overlay.tick(0.1));
        }
        assert_eq!(events, vec![StageEvent::LightboxSettled]);
        let old = overlay.stage.get(first).unwrap();
        assert_eq!(old.alpha, 0.0);
        assert_eq!(old.x, -40.0);
        assert_eq!(overlay.stage.alpha(lightbox.front()), Some(1.0));

        lightbox.crossfade("a.png", Step::Prev, &mut overlay);
        for _ in 0..5 {
            overlay.tick(0.1);
        }
        let old = overlay.stage.get(lightbox.back()).unwrap();
        assert_eq!(old.x, 40.0);
        assert_eq!(lightbox.front(), first);
        assert_eq!(overlay.stage.get(first).unwrap().x, 0.0);
    }

    #[test]
    fn close_removes_layers_and_tweens() {
        let mut overlay = Overlay::new();
        let mut lightbox = Lightbox::open("a.png", &config(), &mut overlay);
        lightbox.crossfade("b.png", Step::Next, &mut overlay);
        overlay.tick(0.1);
        lightbox.close(&mut overlay);
        assert!(overlay.stage.is_empty());
        assert_eq!(overlay.live_tweens(), 0);
    }
}
