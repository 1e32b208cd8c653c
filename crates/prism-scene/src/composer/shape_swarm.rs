//! A swarm of gradient-textured polyhedra drifting around the origin.

use std::f32::consts::TAU;

use prism_common::{SceneError, Vec3};
use prism_config::schema::SwarmConfig;
use prism_motion::{Ease, Wander, WanderShape};
use rand::Rng;

use super::Build;
use crate::geometry::{GeometryDesc, PolyhedronKind};
use crate::graph::{position_keys, scale_keys, Node, NodeId, NodeKind, NodeProp};
use crate::resources::MaterialDesc;
use crate::texture::random_linear_gradient;

const TEXTURE_SIZE: u32 = 256;

pub(super) fn build(
    build: &mut Build<'_>,
    parent: NodeId,
    config: &SwarmConfig,
) -> Result<NodeId, SceneError> {
    let group = build.graph.add(Some(parent), Node::group("swarm"));

    let kind = PolyhedronKind::random(build.rng);
    let radius = 10.0 + build.rng.gen::<f32>() * 60.0;
    let geometry = build.scope.geometry(
        build.backend,
        &GeometryDesc::Polyhedron {
            kind,
            radius,
            detail: 0,
        },
    )?;

    let [cx, cy, cz] = config.container;
    for _ in 0..config.amount {
        let image = random_linear_gradient(TEXTURE_SIZE, build.seed, build.rng);
        let texture = build.scope.texture(build.backend, &image)?;
        let material = build.scope.material(
            build.backend,
            &MaterialDesc::standard(prism_common::Color::from_u32(0xffffff))
                .with_texture(texture)
                .with_opacity(0.9),
        )?;

        let position = Vec3::new(build.spread(cx), build.spread(cy), build.spread(cz));
        let rotation = build.random_rotation();
        let scale = 0.1 + build.rng.gen::<f32>() * 0.2;
        let shape = build.graph.add(
            Some(group),
            Node::new("swarm-shape", NodeKind::Mesh { geometry, material })
                .at(position)
                .rotated(rotation)
                .scaled(Vec3::splat(scale)),
        );

        let wander = Wander::new(
            WanderShape::Path {
                range: config.wander_range,
                points: 3,
                speed: config.speed,
            },
            3,
            build.rng.gen(),
        );
        build
            .animator
            .wander(build.owner, position_keys(shape), wander, Ease::QUAD_IN_OUT);
        build.trackers.push(shape);
    }

    build.spin(group, NodeProp::RotationY, TAU, 50.0);
    build.breathe(&scale_keys(group));
    Ok(group)
}
