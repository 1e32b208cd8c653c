//! Shared range-validation helpers used by all domain validators.

use regex::Regex;
use std::sync::LazyLock;

static EASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(none|linear|(quad|cubic|power[1-4]|sine|elastic|bounce|back)(\.(in|out|inOut))?(\(\s*\d+(\.\d+)?\s*\))?)$",
    )
    .unwrap()
});

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float).
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error unless `value` is strictly positive.
pub(crate) fn validate_positive(errors: &mut Vec<String>, name: &str, value: f64) {
    if value.is_nan() || value <= 0.0 {
        errors.push(format!("{name} = {value} must be greater than 0"));
    }
}

/// Push an error unless every axis of a container envelope is positive.
pub(crate) fn validate_container(errors: &mut Vec<String>, name: &str, value: [f32; 3]) {
    if value.iter().any(|v| v.is_nan() || *v <= 0.0) {
        errors.push(format!(
            "{name} = [{}, {}, {}] must be positive on every axis",
            value[0], value[1], value[2]
        ));
    }
}

/// Push an error if `value` is not a recognized easing identifier.
pub(crate) fn validate_ease(errors: &mut Vec<String>, name: &str, value: &str) {
    if !EASE_RE.is_match(value) {
        errors.push(format!("{name} = \"{value}\" is not a known easing"));
    }
}
