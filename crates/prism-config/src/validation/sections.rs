//! Validation for smaller config sections: motion, performance, effects,
//! and showcase.

use crate::schema::{ParticleBudget, PrismConfig};

use super::helpers::{validate_ease, validate_positive, validate_range, validate_range_f64};

/// Validate motion constraints.
pub(crate) fn validate_motion(errors: &mut Vec<String>, config: &PrismConfig) {
    let scroll = &config.motion.scroll;
    validate_range_f64(errors, "motion.scroll.damping", scroll.damping as f64, 0.0, 5.0);
    validate_ease(errors, "motion.scroll.ease", &scroll.ease);
    validate_range_f64(
        errors,
        "motion.reveal_threshold",
        config.motion.reveal_threshold,
        0.0,
        2000.0,
    );
    validate_positive(errors, "motion.lag_threshold_ms", config.motion.lag_threshold_ms);
    if config.motion.lag_step_ms <= 0.0 || config.motion.lag_step_ms > config.motion.lag_threshold_ms
    {
        errors.push(format!(
            "motion.lag_step_ms = {} must be in (0, motion.lag_threshold_ms]",
            config.motion.lag_step_ms
        ));
    }
}

/// Validate performance constraints.
pub(crate) fn validate_performance(errors: &mut Vec<String>, config: &PrismConfig) {
    let performance = &config.performance;
    validate_range(errors, "performance.frame_rate", performance.frame_rate, 24, 240);
    validate_budget(errors, "performance.budgets.low", &performance.budgets.low);
    validate_budget(errors, "performance.budgets.medium", &performance.budgets.medium);
    validate_budget(errors, "performance.budgets.high", &performance.budgets.high);
}

fn validate_budget(errors: &mut Vec<String>, name: &str, budget: &ParticleBudget) {
    validate_range(errors, &format!("{name}.small_fields"), budget.small_fields, 1, 100);
    validate_range(
        errors,
        &format!("{name}.small_particles"),
        budget.small_particles,
        1,
        10_000,
    );
    validate_range(errors, &format!("{name}.large_fields"), budget.large_fields, 1, 100);
    validate_range(
        errors,
        &format!("{name}.large_particles"),
        budget.large_particles,
        1,
        10_000,
    );
}

/// Validate post-processing constraints.
pub(crate) fn validate_effects(errors: &mut Vec<String>, config: &PrismConfig) {
    let bloom = &config.effects.bloom;
    validate_range_f64(errors, "effects.bloom.intensity", bloom.intensity as f64, 0.0, 3.0);
    validate_range_f64(
        errors,
        "effects.bloom.luminance_threshold",
        bloom.luminance_threshold as f64,
        0.0,
        1.0,
    );
    validate_range_f64(
        errors,
        "effects.bloom.luminance_smoothing",
        bloom.luminance_smoothing as f64,
        0.0,
        1.0,
    );
    validate_range_f64(
        errors,
        "effects.film_grain.intensity",
        config.effects.film_grain.intensity as f64,
        0.0,
        1.0,
    );
}

/// Validate showcase constraints.
pub(crate) fn validate_showcase(errors: &mut Vec<String>, config: &PrismConfig) {
    let showcase = &config.showcase;
    if showcase.content_dir.trim().is_empty() {
        errors.push("showcase.content_dir must not be empty".into());
    }
    validate_positive(errors, "showcase.video_min_width", showcase.video_min_width);
    validate_positive(errors, "showcase.narrow_viewport", showcase.narrow_viewport);
    validate_positive(
        errors,
        "showcase.entrance.duration",
        showcase.entrance.duration as f64,
    );
    validate_range_f64(
        errors,
        "showcase.entrance.stagger",
        showcase.entrance.stagger as f64,
        0.0,
        10.0,
    );
    validate_positive(
        errors,
        "showcase.lightbox.duration",
        showcase.lightbox.duration as f64,
    );
    validate_range(
        errors,
        "showcase.scene.texture_size",
        showcase.scene.texture_size,
        16,
        4096,
    );
}
