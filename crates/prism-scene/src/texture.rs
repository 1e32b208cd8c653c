//! RGBA gradient bitmaps and sprite compositing.
//!
//! Gradients interpolate in premultiplied space the way a 2D canvas does,
//! so a stop fading to transparent does not darken toward black.

use image::{Rgba, RgbaImage};
use prism_common::Color;
use rand::Rng;

use crate::palette::random_hue;

/// A gradient color stop; `offset` is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stop {
    pub offset: f32,
    pub color: Color,
}

impl Stop {
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

fn premultiplied(c: Color) -> [f32; 4] {
    let a = c.a as f32 / 255.0;
    [
        c.r as f32 / 255.0 * a,
        c.g as f32 / 255.0 * a,
        c.b as f32 / 255.0 * a,
        a,
    ]
}

fn unpremultiply(p: [f32; 4]) -> Rgba<u8> {
    let a = p[3].clamp(0.0, 1.0);
    if a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let byte = |v: f32| ((v / a).clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba([byte(p[0]), byte(p[1]), byte(p[2]), (a * 255.0).round() as u8])
}

/// Color of a gradient at `t`; clamps to the first and last stops.
pub fn sample(stops: &[Stop], t: f32) -> Rgba<u8> {
    let Some(first) = stops.first() else {
        return Rgba([0, 0, 0, 0]);
    };
    if t <= first.offset {
        return unpremultiply(premultiplied(first.color));
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let f = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
            let (pa, pb) = (premultiplied(a.color), premultiplied(b.color));
            let mix = std::array::from_fn(|i| pa[i] * (1.0 - f) + pb[i] * f);
            return unpremultiply(mix);
        }
    }
    let last = stops[stops.len() - 1];
    unpremultiply(premultiplied(last.color))
}

/// Horizontal gradient, left to right.
pub fn linear_gradient(width: u32, height: u32, stops: &[Stop]) -> RgbaImage {
    let w = width.max(1) as f32;
    RgbaImage::from_fn(width, height, |x, _| sample(stops, (x as f32 + 0.5) / w))
}

/// Gradient from the center out to a radius of half the width.
pub fn radial_gradient(width: u32, height: u32, stops: &[Stop]) -> RgbaImage {
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let radius = (width as f32 / 2.0).max(f32::EPSILON);
    RgbaImage::from_fn(width, height, |x, y| {
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        sample(stops, (dx * dx + dy * dy).sqrt() / radius)
    })
}

fn random_colors(seed: Color, rng: &mut impl Rng) -> Vec<Color> {
    let amount = 2 + rng.gen::<f32>().round() as usize;
    (0..amount).map(|_| random_hue(seed, rng).to_color()).collect()
}

/// 2–3 random hues, the first repeated at the end so the texture tiles.
pub fn random_linear_gradient(size: u32, seed: Color, rng: &mut impl Rng) -> RgbaImage {
    let mut colors = random_colors(seed, rng);
    let amount = colors.len() as f32;
    colors.push(colors[0]);
    let stops: Vec<Stop> = colors
        .into_iter()
        .enumerate()
        .map(|(i, c)| Stop::new(i as f32 / amount, c))
        .collect();
    linear_gradient(size, size, &stops)
}

/// 2–3 random hues from the center, fading to transparent at the edge.
pub fn random_radial_gradient(size: u32, seed: Color, rng: &mut impl Rng) -> RgbaImage {
    let colors = random_colors(seed, rng);
    let amount = colors.len() as f32;
    let mut stops: Vec<Stop> = colors
        .into_iter()
        .enumerate()
        .map(|(i, c)| Stop::new(i as f32 / amount, c))
        .collect();
    stops.push(Stop::new(1.0, Color::TRANSPARENT));
    radial_gradient(size, size, &stops)
}

/// Draw `source` onto `dest` with the destination-atop operator.
///
/// The result keeps the source's coverage and shows the destination's
/// color wherever both are present. Sizes must match; extra pixels of the
/// larger image are ignored.
pub fn destination_atop(dest: &RgbaImage, source: &RgbaImage) -> RgbaImage {
    let width = dest.width().min(source.width());
    let height = dest.height().min(source.height());
    RgbaImage::from_fn(width, height, |x, y| {
        let d = dest.get_pixel(x, y).0;
        let s = source.get_pixel(x, y).0;
        let to_color = |p: [u8; 4]| Color::from_rgba(p[0], p[1], p[2], p[3]);
        let (pd, ps) = (premultiplied(to_color(d)), premultiplied(to_color(s)));
        let (ad, as_) = (pd[3], ps[3]);
        let mut out: [f32; 4] = std::array::from_fn(|i| ps[i] * (1.0 - ad) + pd[i] * as_);
        out[3] = as_;
        unpremultiply(out)
    })
}

/// White four-pointed star with a soft round core.
pub fn star_sprite(size: u32) -> RgbaImage {
    let half = size.max(1) as f32 / 2.0;
    RgbaImage::from_fn(size, size, |x, y| {
        let nx = (x as f32 + 0.5 - half) / half;
        let ny = (y as f32 + 0.5 - half) / half;
        let r = (nx * nx + ny * ny).sqrt();
        if r >= 1.0 {
            return Rgba([255, 255, 255, 0]);
        }
        let core = (1.0 - r).powi(3);
        let spikes = (1.0 - r) * ((-nx.abs() * 18.0).exp() + (-ny.abs() * 18.0).exp()) * 0.6;
        let alpha = (core + spikes).clamp(0.0, 1.0);
        Rgba([255, 255, 255, (alpha * 255.0).round() as u8])
    })
}

/// Particle sprite: `star` tinted by a fresh random radial gradient.
pub fn particle_sprite(star: &RgbaImage, seed: Color, rng: &mut impl Rng) -> RgbaImage {
    let gradient = random_radial_gradient(star.width(), seed, rng);
    destination_atop(&gradient, star)
}
