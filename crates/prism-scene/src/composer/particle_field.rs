//! Star-sprite particle fields.

use std::f32::consts::TAU;

use prism_common::SceneError;
use prism_config::schema::{ParticleBudget, ParticleLayerConfig, ParticlesConfig};
use prism_motion::{Direction, Ease, Repeat, TweenSpec};
use rand::Rng;

use super::Build;
use crate::geometry::{scatter_points, GeometryDesc};
use crate::graph::{Node, NodeId, NodeKind, NodeProp};
use crate::resources::MaterialDesc;
use crate::texture::{particle_sprite, star_sprite};

/// Build every small and large field the budget allows. Returns the number
/// of fields built.
pub(super) fn build(
    build: &mut Build<'_>,
    parent: NodeId,
    config: &ParticlesConfig,
    budget: ParticleBudget,
) -> Result<usize, SceneError> {
    let star = star_sprite(config.sprite_size);
    let layers = [
        (&config.small, budget.small_fields, budget.small_particles),
        (&config.large, budget.large_fields, budget.large_particles),
    ];

    let mut built = 0;
    for (layer, fields, particles) in layers {
        for _ in 0..fields {
            field(build, parent, layer, particles as usize, &star)?;
            built += 1;
        }
    }
    Ok(built)
}

fn field(
    build: &mut Build<'_>,
    parent: NodeId,
    layer: &ParticleLayerConfig,
    count: usize,
    star: &image::RgbaImage,
) -> Result<NodeId, SceneError> {
    let sprite = particle_sprite(star, build.seed, build.rng);
    let texture = build.scope.texture(build.backend, &sprite)?;
    let size = layer.size_min + build.rng.gen::<f32>() * layer.size_spread;
    let material = build.scope.material(
        build.backend,
        &MaterialDesc::points(texture, size, layer.opacity),
    )?;
    let points = scatter_points(count, layer.container, build.rng);
    let geometry = build
        .scope
        .geometry(build.backend, &GeometryDesc::Points(points))?;

    let node = build.graph.add(
        Some(parent),
        Node::new(
            "particles",
            NodeKind::Points {
                geometry,
                material,
                count,
            },
        )
        .with_size(size)
        .with_opacity(layer.opacity),
    );

    build.tween(
        TweenSpec::new(2.0)
            .from((node, NodeProp::Opacity), 0.0)
            .from((node, NodeProp::Size), 0.0)
            .ease(Ease::QUAD_IN_OUT)
            .delay(0.5),
    );
    for axis in NodeProp::SCALE {
        let to = 1.0 + build.rng.gen::<f32>() * 2.0;
        let duration = 30.0 + build.rng.gen::<f32>() * 20.0;
        build.tween(
            TweenSpec::new(duration)
                .to((node, axis), to)
                .ease(Ease::back(Direction::InOut))
                .yoyo(true)
                .repeat(Repeat::Infinite),
        );
    }
    build.spin(node, NodeProp::RotationY, -TAU, 100.0);
    Ok(node)
}
