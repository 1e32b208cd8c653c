//! Tests for color parsing and validation.

use super::*;

#[test]
fn parse_hex_6_digit() {
    let c = parse_color("#ccff00").unwrap();
    assert_eq!(c, Color::from_rgba(204, 255, 0, 255));
}

#[test]
fn parse_hex_8_digit() {
    let c = parse_color("#00d4ff80").unwrap();
    assert_eq!(c, Color::from_rgba(0, 212, 255, 128));
}

#[test]
fn parse_hex_3_digit() {
    let c = parse_color("#f00").unwrap();
    assert_eq!(c, Color::from_rgba(255, 0, 0, 255));
}

#[test]
fn parse_rgba_float_alpha() {
    let c = parse_color("rgba(0,212,255,0.12)").unwrap();
    // 0.12 * 255 = 30.6 -> 31
    assert_eq!(c, Color::from_rgba(0, 212, 255, 31));
}

#[test]
fn parse_hsl_matches_seed() {
    let c = parse_color("hsl(72, 100%, 50%)").unwrap();
    assert_eq!(c.to_hex(), "#ccff00");
}

#[test]
fn parse_hsl_wraps_negative_hue() {
    let a = parse_color("hsl(-90, 100%, 50%)").unwrap();
    let b = parse_color("hsl(270, 100%, 50%)").unwrap();
    assert_eq!(a, b);
}

#[test]
fn parse_color_invalid_format() {
    assert!(parse_color("not-a-color").is_err());
    assert!(parse_color("").is_err());
    assert!(parse_color("#xyz").is_err());
    assert!(parse_color("rgba(300,0,0,1.0)").is_err());
    assert!(parse_color("hsl(10, 150%, 50%)").is_err());
}

#[test]
fn validate_color_accepts_valid() {
    assert!(validate_color("#ccff00"));
    assert!(validate_color("#00d4ff80"));
    assert!(validate_color("#f00"));
    assert!(validate_color("rgba(255,255,255,1.0)"));
    assert!(validate_color("hsl(200, 50%, 40%)"));
}

#[test]
fn validate_color_rejects_invalid() {
    assert!(!validate_color(""));
    assert!(!validate_color("not-a-color"));
    assert!(!validate_color("#12345"));
    assert!(!validate_color("rgb(10,20)"));
    assert!(!validate_color("hsl(10, 20, 30)"));
}
