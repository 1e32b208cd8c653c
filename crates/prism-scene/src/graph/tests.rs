use super::*;
use std::f32::consts::FRAC_PI_2;

fn mesh(g: u64, m: u64) -> Node {
    Node::new(
        "mesh",
        NodeKind::Mesh {
            geometry: ResourceId(g),
            material: ResourceId(m),
        },
    )
}

#[test]
fn add_links_parent_and_children() {
    let mut graph = SceneGraph::new();
    let root = graph.add(None, Node::group("root"));
    let a = graph.add(Some(root), mesh(1, 2));
    let b = graph.add(Some(root), Node::group("b"));
    assert_eq!(graph.children(root), &[a, b]);
    assert_eq!(graph.get(a).unwrap().parent, Some(root));
    assert_eq!(graph.roots(), &[root]);
    assert_eq!(graph.walk(), vec![root, a, b]);
    assert_eq!(graph.find("b"), Some(b));
}

#[test]
fn remove_returns_subtree_resources() {
    let mut graph = SceneGraph::new();
    let root = graph.add(None, Node::group("root"));
    let group = graph.add(Some(root), Node::group("swarm"));
    graph.add(Some(group), mesh(1, 2));
    graph.add(Some(group), mesh(3, 4));
    let keep = graph.add(Some(root), mesh(5, 6));

    let mut released = graph.remove(group);
    released.sort();
    assert_eq!(
        released,
        vec![ResourceId(1), ResourceId(2), ResourceId(3), ResourceId(4)]
    );
    assert_eq!(graph.len(), 2);
    assert_eq!(graph.children(root), &[keep]);
    assert_eq!(graph.referenced_resources(), vec![ResourceId(5), ResourceId(6)]);
    assert!(graph.remove(group).is_empty());
}

#[test]
fn animatable_fields_round_trip() {
    let mut graph = SceneGraph::new();
    let id = graph.add(None, Node::group("g").with_color(Hsl::new(10.0, 1.0, 0.5)));

    graph.set((id, NodeProp::PositionY), 4.0);
    graph.set((id, NodeProp::ScaleZ), 2.0);
    graph.set((id, NodeProp::Opacity), 0.25);
    assert_eq!(Animatable::get(&graph, (id, NodeProp::PositionY)), Some(4.0));
    assert_eq!(Animatable::get(&graph, (id, NodeProp::ScaleZ)), Some(2.0));
    assert_eq!(Animatable::get(&graph, (id, NodeProp::Opacity)), Some(0.25));

    graph.set((id, NodeProp::Hue), 370.0);
    let hue = Animatable::get(&graph, (id, NodeProp::Hue)).unwrap();
    assert!((hue - 10.0).abs() < 1e-4);

    graph.set((id, NodeProp::Visible), 0.0);
    assert!(!graph.is_visible(id));
    graph.set((id, NodeProp::Visible), 1.0);
    assert!(graph.is_visible(id));
}

#[test]
fn removed_node_reads_none() {
    let mut graph = SceneGraph::new();
    let id = graph.add(None, Node::group("g"));
    graph.remove(id);
    assert_eq!(Animatable::get(&graph, (id, NodeProp::PositionX)), None);
    graph.set((id, NodeProp::PositionX), 1.0);
    assert!(graph.is_empty());
}

#[test]
fn hue_is_none_without_color() {
    let mut graph = SceneGraph::new();
    let id = graph.add(None, Node::group("g"));
    assert_eq!(Animatable::get(&graph, (id, NodeProp::Hue)), None);
}

#[test]
fn hidden_ancestor_hides_child() {
    let mut graph = SceneGraph::new();
    let root = graph.add(None, Node::group("root").hidden());
    let child = graph.add(Some(root), Node::group("child"));
    assert!(!graph.is_visible(child));
}

#[test]
fn world_position_composes_parents() {
    let mut graph = SceneGraph::new();
    let root = graph.add(
        None,
        Node::group("root")
            .at(Vec3::new(10.0, 0.0, 0.0))
            .scaled(Vec3::splat(2.0)),
    );
    let child = graph.add(Some(root), Node::group("child").at(Vec3::new(1.0, 2.0, 3.0)));
    let p = graph.world_position(child).unwrap();
    assert!(p.distance(Vec3::new(12.0, 4.0, 6.0)) < 1e-4);
}

#[test]
fn look_at_points_forward_axis_at_target() {
    let mut graph = SceneGraph::new();
    let id = graph.add(None, Node::group("shape").at(Vec3::new(0.0, 0.0, -10.0)));
    graph.look_at(id, Vec3::ZERO);
    let node = graph.get(id).unwrap();
    assert!(node.rotation.x.abs() < 1e-5);
    assert!(node.rotation.y.abs() < 1e-5);

    graph.get_mut(id).unwrap().position = Vec3::new(-5.0, 0.0, 0.0);
    graph.look_at(id, Vec3::ZERO);
    assert!((graph.get(id).unwrap().rotation.y - FRAC_PI_2).abs() < 1e-5);

    // The rotated +z axis lands on the direction to the target.
    graph.get_mut(id).unwrap().position = Vec3::new(3.0, -4.0, 12.0);
    graph.look_at(id, Vec3::ZERO);
    let m = graph.world_matrix(id).unwrap();
    let tip = matrix::transform_point(&m, Vec3::new(0.0, 0.0, 13.0));
    assert!(tip.distance(Vec3::ZERO) < 1e-3, "{tip:?}");
}
