use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    #[error("unknown easing: {0}")]
    UnknownEase(String),

    #[error("invalid easing parameter in {0}")]
    InvalidEaseParam(String),
}
