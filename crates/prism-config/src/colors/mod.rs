//! Color parsing and validation utilities.
//!
//! Supports `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgba(r,g,b,a)` and
//! `hsl(h, s%, l%)` formats. In the `rgba()` format, the alpha component can
//! be either 0-255 (integer) or 0.0-1.0 (float), matching CSS conventions.

mod parse;

#[cfg(test)]
mod tests;

use prism_common::types::Color;
use prism_common::ConfigError;

use parse::{parse_hex, parse_hsl, parse_rgba, HEX_RE, HSL_RE, RGBA_RE};

/// Parse a color string into a [`Color`].
///
/// Accepted formats:
/// - `#RRGGBB` (e.g. `#ccff00`)
/// - `#RRGGBBAA` (e.g. `#ccff0080`)
/// - `rgba(r,g,b,a)` where `a` is 0.0-1.0 (e.g. `rgba(0,212,255,0.12)`)
/// - `hsl(h,s%,l%)` (e.g. `hsl(72, 100%, 50%)`)
pub fn parse_color(s: &str) -> Result<Color, ConfigError> {
    let s = s.trim();

    if s.starts_with('#') {
        if let Some(color) = parse_hex(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid hex color: {s}")));
    }

    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        if let Some(color) = parse_rgba(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid rgba color: {s}")));
    }

    if s.starts_with("hsl(") {
        if let Some(color) = parse_hsl(s) {
            return Ok(color);
        }
        return Err(ConfigError::ParseError(format!("invalid hsl color: {s}")));
    }

    Err(ConfigError::ParseError(format!(
        "unrecognized color format: {s}"
    )))
}

/// Validate that a string is a recognized color format.
pub fn validate_color(s: &str) -> bool {
    let s = s.trim();
    if s.starts_with('#') {
        return HEX_RE.is_match(s);
    }
    if s.starts_with("rgba(") || s.starts_with("rgb(") {
        return RGBA_RE.is_match(s);
    }
    if s.starts_with("hsl(") {
        return HSL_RE.is_match(s);
    }
    false
}
