//! Where project textures come from.

use std::path::PathBuf;

use image::RgbaImage;
use prism_common::{Color, ContentError};
use prism_scene::texture::random_linear_gradient;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Resolves an image URL from the content to a bitmap for the 3D box.
pub trait TextureSource {
    fn load(&mut self, url: &str) -> Result<RgbaImage, ContentError>;
}

/// Stand-in gradients for every URL. Used headless and when no image
/// assets ship with the content.
pub struct GradientSource {
    size: u32,
    seed: Color,
    rng: StdRng,
}

impl GradientSource {
    pub fn new(size: u32, seed: Color, rng_seed: u64) -> Self {
        Self {
            size,
            seed,
            rng: StdRng::seed_from_u64(rng_seed),
        }
    }
}

impl TextureSource for GradientSource {
    fn load(&mut self, _url: &str) -> Result<RgbaImage, ContentError> {
        Ok(random_linear_gradient(self.size, self.seed, &mut self.rng))
    }
}

/// PNG files resolved relative to the content directory.
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TextureSource for FileSource {
    fn load(&mut self, url: &str) -> Result<RgbaImage, ContentError> {
        let path = self.root.join(url.trim_start_matches('/'));
        image::open(&path)
            .map(|img| img.to_rgba8())
            .map_err(|e| ContentError::Read(format!("{}: {e}", path.display())))
    }
}
