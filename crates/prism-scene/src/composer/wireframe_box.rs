//! Large wireframe cube enclosing the header.

use std::f32::consts::TAU;

use prism_config::schema::WireframeBoxConfig;
use prism_motion::{Ease, TweenSpec, Wander, WanderShape};
use prism_common::{Hsl, SceneError};
use rand::Rng;

use super::Build;
use crate::geometry::GeometryDesc;
use crate::graph::{Node, NodeId, NodeKind, NodeProp};
use crate::palette::random_hue;
use crate::resources::MaterialDesc;

pub(super) fn build(
    build: &mut Build<'_>,
    parent: NodeId,
    config: &WireframeBoxConfig,
) -> Result<NodeId, SceneError> {
    let geometry = build.scope.geometry(
        build.backend,
        &GeometryDesc::Box {
            size: config.size,
            segments: config.segments,
        },
    )?;
    let start = random_hue(build.seed, build.rng);
    let color = Hsl::new(start.h, 1.0, 0.5);
    let material = build.scope.material(
        build.backend,
        &MaterialDesc::basic(color.to_color())
            .wireframe()
            .with_opacity(config.opacity)
            .without_fog(),
    )?;

    let rotation = build.random_rotation();
    let node = build.graph.add(
        Some(parent),
        Node::new("wireframe-box", NodeKind::Mesh { geometry, material })
            .rotated(rotation)
            .with_opacity(config.opacity)
            .with_color(color),
    );

    build.tween(
        TweenSpec::new(2.0)
            .from((node, NodeProp::Opacity), 0.0)
            .ease(Ease::QUAD_IN_OUT)
            .delay(0.5),
    );
    build.spin(node, NodeProp::RotationZ, -rotation.z + TAU, config.spin_duration);

    let hue = Wander::new(
        WanderShape::Uniform {
            min: 0.0,
            spread: 360.0,
            duration_min: 5.0,
            duration_spread: 20.0,
        },
        1,
        build.rng.gen(),
    );
    build
        .animator
        .wander(build.owner, vec![(node, NodeProp::Hue)], hue, Ease::QUAD_IN_OUT);
    Ok(node)
}
