//! Dark metallic shapes lit by four wandering emissive light carriers.

use std::f32::consts::{FRAC_PI_4, TAU};

use prism_common::{Color, SceneError, Vec3};
use prism_config::schema::ClusterConfig;
use prism_motion::{Direction, Ease, Wander, WanderShape};
use rand::Rng;

use super::Build;
use crate::geometry::{GeometryDesc, PolyhedronKind};
use crate::graph::{position_keys, scale_keys, Light, Node, NodeId, NodeKind, NodeProp};
use crate::palette::Palette;
use crate::resources::MaterialDesc;

/// Viewports narrower than this get smaller metallic shapes.
const NARROW_WIDTH: f32 = 400.0;
const BRIGHT_SPREAD: f32 = 50.0;

pub(super) fn build(
    build: &mut Build<'_>,
    parent: NodeId,
    config: &ClusterConfig,
    viewport_width: f32,
) -> Result<NodeId, SceneError> {
    let group = build.graph.add(Some(parent), Node::group("cluster"));
    build.spin(group, NodeProp::RotationY, TAU, config.spin_duration);

    let geometry = build
        .scope
        .geometry(build.backend, &GeometryDesc::Merkaba { size: 1.0 })?;
    let material = build.scope.material(
        build.backend,
        &MaterialDesc::standard(Color::from_u32(0x333333)).with_pbr(0.8, 0.2),
    )?;
    let (scale_min, scale_max) = if viewport_width < NARROW_WIDTH {
        (1.0, 2.5)
    } else {
        (2.0, 3.0)
    };

    let half = config.shape_range / 2.0;
    for _ in 0..config.shape_count {
        let position = Vec3::new(build.spread(half), build.spread(half), build.spread(half));
        let shape = build.graph.add(
            Some(group),
            Node::new("merkaba", NodeKind::Mesh { geometry, material }).at(position),
        );

        let drift = Wander::new(
            WanderShape::Path {
                range: config.shape_range,
                points: 1,
                speed: config.shape_speed,
            },
            3,
            build.rng.gen(),
        );
        build
            .animator
            .wander(build.owner, position_keys(shape), drift, Ease::QUAD_IN_OUT);

        let pulse = Wander::new(
            WanderShape::Uniform {
                min: scale_min,
                spread: scale_max,
                duration_min: 1.0,
                duration_spread: 10.0,
            },
            3,
            build.rng.gen(),
        );
        build.animator.wander(
            build.owner,
            scale_keys(shape),
            pulse,
            Ease::Bounce(Direction::InOut),
        );
        build.trackers.push(shape);
    }

    let tetrad = Palette::tetrad(build.seed, build.rng);
    for hsl in tetrad.colors() {
        let color = hsl.to_color();
        let position = Vec3::new(
            build.spread(BRIGHT_SPREAD),
            build.spread(BRIGHT_SPREAD),
            build.spread(BRIGHT_SPREAD),
        );
        let carrier = build
            .graph
            .add(Some(group), Node::group("bright").at(position).with_color(*hsl));

        let radius = 0.5 + (build.rng.gen::<f32>() * 2.0).round();
        let geometry = build.scope.geometry(
            build.backend,
            &GeometryDesc::Polyhedron {
                kind: PolyhedronKind::Icosahedron,
                radius,
                detail: 2,
            },
        )?;
        let material = build.scope.material(
            build.backend,
            &MaterialDesc::standard(color).with_emissive(color),
        )?;
        build.graph.add(
            Some(carrier),
            Node::new("bright-shape", NodeKind::Mesh { geometry, material }),
        );
        build.graph.add(
            Some(carrier),
            Node::new(
                "spot",
                NodeKind::Light(Light::Spot {
                    color,
                    intensity: config.light_intensity,
                    distance: config.light_distance,
                    angle: FRAC_PI_4,
                    penumbra: 0.3,
                    decay: 1.0,
                }),
            ),
        );

        let wander = Wander::path(config.bright_range, config.bright_speed, build.rng.gen());
        build
            .animator
            .wander(build.owner, position_keys(carrier), wander, Ease::QUAD_IN_OUT);
        build.trackers.push(carrier);
    }

    Ok(group)
}
