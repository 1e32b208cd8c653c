//! Full configuration validation.
//!
//! Validates numeric ranges, color formats and easing names. Each domain
//! has its own submodule; this orchestrator calls them all and collects
//! errors into a single `ConfigError`.

mod helpers;
mod palette;
mod scene;
mod sections;

#[cfg(test)]
mod tests;

use crate::schema::PrismConfig;
use prism_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PrismConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    palette::validate_palette(&mut errors, config);
    scene::validate_camera(&mut errors, config);
    scene::validate_shapes(&mut errors, config);
    scene::validate_particles(&mut errors, config);
    sections::validate_motion(&mut errors, config);
    sections::validate_performance(&mut errors, config);
    sections::validate_effects(&mut errors, config);
    sections::validate_showcase(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
