use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures while loading the static JSON content fixtures.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content read error: {0}")]
    Read(String),

    #[error("content parse error in {file}: {message}")]
    Parse { file: String, message: String },

    #[error("invalid content record: {0}")]
    Invalid(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("invalid container bounds: {0}")]
    InvalidBounds(String),

    #[error("render backend error: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PrismError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
