pub mod errors;
pub mod types;

pub use errors::{ConfigError, ContentError, PrismError, SceneError};
pub use types::{Color, Hsl, Rect, Vec3};

pub type Result<T> = std::result::Result<T, PrismError>;
