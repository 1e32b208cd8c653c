//! Post-processing passes enabled for a render profile.

use prism_config::schema::EffectsConfig;

use crate::tier::{RenderProfile, Tier};

/// Bloom pass parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloomPass {
    pub intensity: f32,
    pub luminance_threshold: f32,
    pub luminance_smoothing: f32,
    pub mipmap_blur: bool,
}

/// The post-processing chain of one surface.
#[derive(Debug, Clone, PartialEq)]
pub struct PostEffects {
    /// Master switch for all passes.
    pub enabled: bool,
    pub bloom: Option<BloomPass>,
    /// Film grain amplitude.
    pub film_grain: Option<f32>,
    pub antialias: bool,
}

impl PostEffects {
    /// Every pass the config enables, regardless of device.
    pub fn new(config: &EffectsConfig) -> Self {
        let bloom = config.bloom.enabled.then_some(BloomPass {
            intensity: config.bloom.intensity,
            luminance_threshold: config.bloom.luminance_threshold,
            luminance_smoothing: config.bloom.luminance_smoothing,
            mipmap_blur: config.bloom.mipmap_blur,
        });
        let film_grain = config
            .film_grain
            .enabled
            .then_some(config.film_grain.intensity);
        Self {
            enabled: config.enabled,
            bloom: if config.enabled { bloom } else { None },
            film_grain: if config.enabled { film_grain } else { None },
            antialias: true,
        }
    }

    /// Passes tuned for the given profile.
    ///
    /// - low: no post-processing at all.
    /// - medium: bloom only.
    /// - high: bloom and film grain.
    pub fn from_profile(profile: &RenderProfile, config: &EffectsConfig) -> Self {
        let mut effects = Self::new(config);
        effects.antialias = profile.antialias;
        if !profile.bloom {
            effects.bloom = None;
        }
        match profile.tier {
            Tier::Low => {
                effects.enabled = false;
                effects.bloom = None;
                effects.film_grain = None;
            }
            Tier::Medium => effects.film_grain = None,
            Tier::High => {}
        }
        effects
    }

    pub fn pass_count(&self) -> usize {
        if !self.enabled {
            return 0;
        }
        usize::from(self.bloom.is_some()) + usize::from(self.film_grain.is_some())
    }
}

impl Default for PostEffects {
    fn default() -> Self {
        Self::new(&EffectsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_bloom_and_grain() {
        let effects = PostEffects::default();
        assert!(effects.enabled);
        let bloom = effects.bloom.unwrap();
        assert!((bloom.intensity - 1.0).abs() < 1e-6);
        assert!((bloom.luminance_threshold - 0.3).abs() < 1e-6);
        assert!((bloom.luminance_smoothing - 0.9).abs() < 1e-6);
        assert!(bloom.mipmap_blur);
        assert_eq!(effects.pass_count(), 2);
    }

    #[test]
    fn low_tier_disables_everything() {
        let effects = PostEffects::from_profile(
            &RenderProfile::for_tier(Tier::Low),
            &EffectsConfig::default(),
        );
        assert!(!effects.enabled);
        assert!(effects.bloom.is_none());
        assert!(!effects.antialias);
        assert_eq!(effects.pass_count(), 0);
    }

    #[test]
    fn medium_tier_keeps_bloom_only() {
        let effects = PostEffects::from_profile(
            &RenderProfile::for_tier(Tier::Medium),
            &EffectsConfig::default(),
        );
        assert!(effects.bloom.is_some());
        assert!(effects.film_grain.is_none());
        assert_eq!(effects.pass_count(), 1);
    }

    #[test]
    fn high_tier_keeps_all() {
        let effects = PostEffects::from_profile(
            &RenderProfile::for_tier(Tier::High),
            &EffectsConfig::default(),
        );
        assert!(effects.antialias);
        assert_eq!(effects.pass_count(), 2);
    }

    #[test]
    fn master_toggle_wins_over_tier() {
        let config = EffectsConfig {
            enabled: false,
            ..EffectsConfig::default()
        };
        let effects = PostEffects::from_profile(&RenderProfile::for_tier(Tier::High), &config);
        assert_eq!(effects.pass_count(), 0);
        assert!(effects.bloom.is_none());
    }
}
