//! Validation for the 3D header scene: camera, shapes, particles.

use crate::schema::PrismConfig;

use super::helpers::{validate_container, validate_positive, validate_range, validate_range_f64};

/// Validate camera and fog constraints.
pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &PrismConfig) {
    let camera = &config.scene.camera;
    validate_range_f64(errors, "scene.camera.fov", camera.fov as f64, 10.0, 120.0);
    validate_positive(errors, "scene.camera.near", camera.near as f64);
    if camera.far <= camera.near {
        errors.push(format!(
            "scene.camera.far = {} must be greater than scene.camera.near = {}",
            camera.far, camera.near
        ));
    }

    let fog = &config.scene.fog;
    if fog.far <= fog.near {
        errors.push(format!(
            "scene.fog.far = {} must be greater than scene.fog.near = {}",
            fog.far, fog.near
        ));
    }

    let reveal = &config.scene.reveal;
    validate_range_f64(
        errors,
        "scene.reveal.initial_scale",
        reveal.initial_scale as f64,
        0.0,
        1.0,
    );
    validate_positive(errors, "scene.reveal.scale_duration", reveal.scale_duration as f64);
}

/// Validate wireframe box, swarms and bright cluster constraints.
pub(crate) fn validate_shapes(errors: &mut Vec<String>, config: &PrismConfig) {
    let wireframe = &config.scene.wireframe;
    validate_positive(errors, "scene.wireframe.size", wireframe.size as f64);
    validate_range(errors, "scene.wireframe.segments", wireframe.segments, 1, 64);
    validate_range_f64(
        errors,
        "scene.wireframe.opacity",
        wireframe.opacity as f64,
        0.0,
        1.0,
    );
    validate_positive(
        errors,
        "scene.wireframe.spin_duration",
        wireframe.spin_duration as f64,
    );

    for (i, swarm) in config.scene.swarms.iter().enumerate() {
        validate_range(errors, &format!("scene.swarms[{i}].amount"), swarm.amount, 1, 100);
        validate_container(errors, &format!("scene.swarms[{i}].container"), swarm.container);
        validate_positive(
            errors,
            &format!("scene.swarms[{i}].wander_range"),
            swarm.wander_range as f64,
        );
        validate_positive(errors, &format!("scene.swarms[{i}].speed"), swarm.speed as f64);
    }

    let cluster = &config.scene.cluster;
    validate_range(errors, "scene.cluster.shape_count", cluster.shape_count, 0, 100);
    validate_positive(errors, "scene.cluster.shape_speed", cluster.shape_speed as f64);
    validate_positive(errors, "scene.cluster.bright_speed", cluster.bright_speed as f64);
    validate_positive(errors, "scene.cluster.spin_duration", cluster.spin_duration as f64);
}

/// Validate particle field constraints.
pub(crate) fn validate_particles(errors: &mut Vec<String>, config: &PrismConfig) {
    let particles = &config.scene.particles;
    for (name, layer) in [("small", &particles.small), ("large", &particles.large)] {
        validate_positive(
            errors,
            &format!("scene.particles.{name}.size_min"),
            layer.size_min as f64,
        );
        validate_range_f64(
            errors,
            &format!("scene.particles.{name}.opacity"),
            layer.opacity as f64,
            0.0,
            1.0,
        );
        validate_container(
            errors,
            &format!("scene.particles.{name}.container"),
            layer.container,
        );
    }
    validate_range(errors, "scene.particles.sprite_size", particles.sprite_size, 8, 1024);
}
