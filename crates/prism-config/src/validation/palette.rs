//! Validation for the palette and gradient backdrop section.

use crate::colors::parse_color;
use crate::schema::PrismConfig;

use super::helpers::{validate_positive, validate_range, validate_range_f64};

pub(crate) fn validate_palette(errors: &mut Vec<String>, config: &PrismConfig) {
    let palette = &config.palette;
    if parse_color(&palette.seed).is_err() {
        errors.push(format!("palette.seed = \"{}\" is not a valid color", palette.seed));
    }
    validate_range_f64(
        errors,
        "palette.gradient_angle",
        palette.gradient_angle,
        0.0,
        360.0,
    );

    let backdrop = &palette.backdrop;
    validate_range(errors, "palette.backdrop.base_colors", backdrop.base_colors, 1, 12);
    validate_range(
        errors,
        "palette.backdrop.max_extra_colors",
        backdrop.max_extra_colors,
        0,
        6,
    );
    validate_range_f64(
        errors,
        "palette.backdrop.even_chance",
        backdrop.even_chance,
        0.0,
        1.0,
    );
    validate_positive(
        errors,
        "palette.backdrop.fade_duration",
        backdrop.fade_duration as f64,
    );
    validate_positive(
        errors,
        "palette.backdrop.interval_min",
        backdrop.interval_min as f64,
    );
    validate_range_f64(
        errors,
        "palette.backdrop.interval_spread",
        backdrop.interval_spread as f64,
        0.0,
        3600.0,
    );
}
