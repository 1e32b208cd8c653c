mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0.0, 120.0, 1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
        assert_eq!(r.bottom(), 1200.0);
    }

    #[test]
    fn vec3_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 3.0);
        assert_eq!(a + b, Vec3::new(5.0, 8.0, 6.0));
        assert_eq!(b - a, Vec3::new(3.0, 4.0, 0.0));
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(2.5, 4.0, 3.0));
    }

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_from_u32() {
        assert_eq!(Color::from_u32(0xfafafa), Color::from_rgba(250, 250, 250, 255));
        assert_eq!(Color::from_u32(0x00ccff).to_hex(), "#00ccff");
    }

    #[test]
    fn color_to_hex_with_alpha() {
        let c = Color::from_rgba(255, 0, 128, 128);
        assert_eq!(c.to_hex(), "#ff008080");
    }

    #[test]
    fn seed_color_hsl() {
        let seed = Color::from_hex("#ccff00").unwrap();
        let hsl = seed.to_hsl();
        assert!((hsl.h - 72.0).abs() < 0.01);
        assert!((hsl.s - 1.0).abs() < 1e-4);
        assert!((hsl.l - 0.5).abs() < 1e-4);
    }

    #[test]
    fn hsl_roundtrip_primaries() {
        for hex in ["#ff0000", "#00ff00", "#0000ff", "#ccff00", "#fb0097", "#808080"] {
            let c = Color::from_hex(hex).unwrap();
            assert_eq!(c.to_hsl().to_color(), c, "roundtrip failed for {hex}");
        }
    }

    #[test]
    fn spin_wraps_hue() {
        let red = Color::from_hex("#ff0000").unwrap();
        assert_eq!(red.spin(120.0).to_hex(), "#00ff00");
        assert_eq!(red.spin(-120.0).to_hex(), "#0000ff");
        assert_eq!(red.spin(360.0).to_hex(), "#ff0000");
    }

    #[test]
    fn wrap_hue_handles_negatives() {
        assert_eq!(wrap_hue(-30.0), 330.0);
        assert_eq!(wrap_hue(725.0), 5.0);
        assert_eq!(hue_delta(350.0, 10.0), 20.0);
    }

    #[test]
    fn brightness_and_lightness() {
        assert!(Color::from_hex("#ffffff").unwrap().is_light());
        assert!(!Color::from_hex("#000000").unwrap().is_light());
        assert!(Color::from_hex("#ccff00").unwrap().is_light());
        assert!(!Color::from_hex("#0000ff").unwrap().is_light());
    }
}
