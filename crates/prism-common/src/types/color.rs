use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from a packed `0xRRGGBB` value.
    pub fn from_u32(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
            a: 255,
        }
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b, a: 255 })
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self { r, g, b, a })
            }
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    pub fn to_rgba_string(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }

    /// Normalized RGB triple for shader uniforms and material colors.
    pub fn to_rgb_f32(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    pub fn to_hsl(&self) -> Hsl {
        let [r, g, b] = self.to_rgb_f32();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if (max - min).abs() < f32::EPSILON {
            return Hsl::new(0.0, 0.0, l).with_alpha(self.a as f32 / 255.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(h * 60.0, s, l).with_alpha(self.a as f32 / 255.0)
    }

    /// Rotate the hue by `degrees`, keeping saturation and lightness.
    pub fn spin(&self, degrees: f32) -> Self {
        self.to_hsl().spin(degrees).to_color()
    }

    /// Perceived brightness in `0..=255` (ITU BT.601 weights).
    pub fn brightness(&self) -> f32 {
        (self.r as f32 * 299.0 + self.g as f32 * 587.0 + self.b as f32 * 114.0) / 1000.0
    }

    pub fn is_light(&self) -> bool {
        self.brightness() >= 128.0
    }
}

/// A color in hue/saturation/lightness space.
///
/// Hue is in degrees `[0, 360)`; saturation, lightness and alpha are `0.0..=1.0`.
/// Palettes are generated here so hue spacing stays exact until the final
/// conversion to 8-bit RGB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsl {
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: wrap_hue(h),
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
            a: 1.0,
        }
    }

    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a.clamp(0.0, 1.0);
        self
    }

    pub fn spin(&self, degrees: f32) -> Self {
        Self {
            h: wrap_hue(self.h + degrees),
            ..*self
        }
    }

    pub fn to_color(&self) -> Color {
        let (r, g, b) = if self.s <= 0.0 {
            (self.l, self.l, self.l)
        } else {
            let q = if self.l < 0.5 {
                self.l * (1.0 + self.s)
            } else {
                self.l + self.s - self.l * self.s
            };
            let p = 2.0 * self.l - q;
            let h = self.h / 360.0;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };
        Color::from_rgba(
            to_byte(r),
            to_byte(g),
            to_byte(b),
            to_byte(self.a),
        )
    }

    pub fn to_hex(&self) -> String {
        self.to_color().to_hex()
    }
}

/// Wrap a hue angle into `[0, 360)`.
pub fn wrap_hue(degrees: f32) -> f32 {
    let h = degrees % 360.0;
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Smallest non-negative rotation that takes hue `from` to hue `to`.
pub fn hue_delta(from: f32, to: f32) -> f32 {
    wrap_hue(to - from)
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
