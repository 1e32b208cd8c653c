//! Procedural color palettes derived by rotating a seed hue.

use prism_common::{Color, Hsl, SceneError};
use rand::Rng;

/// Text color used on hover accents whose colors are all light.
pub const DARK_TEXT: Color = Color {
    r: 0x45,
    g: 0x45,
    b: 0x45,
    a: 255,
};

/// Ordered, non-empty list of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    seed: Color,
    colors: Vec<Hsl>,
}

/// Whole-degree rotation in `[0, 360]`.
pub fn random_rotation(rng: &mut impl Rng) -> f32 {
    (rng.gen::<f32>() * 360.0).round()
}

/// The seed color spun by a random whole-degree rotation.
pub fn random_hue(seed: Color, rng: &mut impl Rng) -> Hsl {
    seed.to_hsl().spin(random_rotation(rng))
}

impl Palette {
    /// Palette of explicit colors; the first one doubles as the seed.
    pub fn from_colors(colors: Vec<Hsl>) -> Result<Self, SceneError> {
        let seed = colors.first().ok_or(SceneError::EmptyPalette)?.to_color();
        Ok(Self { seed, colors })
    }

    /// `count` hues spaced `360 / count` apart from a randomly rotated base.
    pub fn evenly_spaced(seed: Color, count: usize, rng: &mut impl Rng) -> Result<Self, SceneError> {
        if count == 0 {
            return Err(SceneError::EmptyPalette);
        }
        let base = random_hue(seed, rng);
        let step = 360.0 / count as f32;
        let colors = (0..count).map(|i| base.spin(step * i as f32)).collect();
        Ok(Self { seed, colors })
    }

    /// `count` independent random rotations of a randomly rotated base.
    pub fn random(seed: Color, count: usize, rng: &mut impl Rng) -> Result<Self, SceneError> {
        if count == 0 {
            return Err(SceneError::EmptyPalette);
        }
        let base = random_hue(seed, rng);
        let colors = (0..count)
            .map(|_| base.spin(random_rotation(rng)))
            .collect();
        Ok(Self { seed, colors })
    }

    /// Four hues a quarter turn apart.
    pub fn tetrad(seed: Color, rng: &mut impl Rng) -> Self {
        let base = seed.to_hsl().spin(rng.gen::<f32>() * 360.0);
        Self {
            seed,
            colors: (0..4).map(|i| base.spin(90.0 * i as f32)).collect(),
        }
    }

    /// Color the palette was rotated from.
    pub fn seed(&self) -> Color {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Hsl] {
        &self.colors
    }

    /// Color at `index`, wrapping past the end.
    pub fn get(&self, index: usize) -> Hsl {
        self.colors[index % self.colors.len()]
    }

    /// The color at `floor(len / 2)`; used for fog and key lights.
    pub fn middle(&self) -> Hsl {
        self.colors[self.colors.len() / 2]
    }

    pub fn hex_colors(&self) -> Vec<String> {
        self.colors.iter().map(Hsl::to_hex).collect()
    }

    /// CSS `linear-gradient(<angle>deg, c1, c2, …)`.
    pub fn to_css_gradient(&self, angle: f64) -> String {
        css_gradient(angle, &self.hex_colors())
    }
}

pub(crate) fn css_gradient(angle: f64, colors: &[String]) -> String {
    format!("linear-gradient({angle}deg, {})", colors.join(", "))
}

/// Background and text colors for a hovered grid item.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverAccent {
    pub background: String,
    pub text: Color,
}

/// Random two-color gradient with dark text when both colors are light.
pub fn hover_accent(seed: Color, angle: f64, rng: &mut impl Rng) -> HoverAccent {
    let colors = [random_hue(seed, rng).to_color(), random_hue(seed, rng).to_color()];
    let text = if colors.iter().all(Color::is_light) {
        DARK_TEXT
    } else {
        Color::from_rgba(255, 255, 255, 255)
    };
    let hex: Vec<String> = colors.iter().map(Color::to_hex).collect();
    HoverAccent {
        background: css_gradient(angle, &hex),
        text,
    }
}
