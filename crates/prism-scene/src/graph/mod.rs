//! Scene graph: a tree of transformable nodes.
//!
//! Nodes are addressed by [`NodeId`]; their animatable fields are exposed
//! to the animator through [`NodeProp`] keys, so a tween holds a
//! `(NodeId, NodeProp)` pair instead of a reference into the tree. Tweens
//! on a removed node find nothing to read and are dropped.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use prism_common::{Color, Hsl, Vec3};
use prism_motion::Animatable;

use crate::matrix::{self, Mat4};
use crate::resources::ResourceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Ambient {
        color: Color,
        intensity: f32,
    },
    Directional {
        color: Color,
        intensity: f32,
    },
    Spot {
        color: Color,
        intensity: f32,
        distance: f32,
        angle: f32,
        penumbra: f32,
        decay: f32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Group,
    Camera,
    Mesh {
        geometry: ResourceId,
        material: ResourceId,
    },
    Points {
        geometry: ResourceId,
        material: ResourceId,
        count: usize,
    },
    Light(Light),
}

impl NodeKind {
    fn resources(&self) -> Vec<ResourceId> {
        match self {
            NodeKind::Mesh { geometry, material } | NodeKind::Points { geometry, material, .. } => {
                vec![*geometry, *material]
            }
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    pub opacity: f32,
    /// Point size, for particle fields.
    pub size: f32,
    /// Tintable color; `None` for nodes whose hue is not animated.
    pub color: Option<Hsl>,
    pub visible: bool,
}

impl Node {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parent: None,
            children: Vec::new(),
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            opacity: 1.0,
            size: 1.0,
            color: None,
            visible: true,
        }
    }

    pub fn group(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Group)
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn rotated(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_color(mut self, color: Hsl) -> Self {
        self.color = Some(color);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn local_matrix(&self) -> Mat4 {
        matrix::compose(self.position, self.rotation, self.scale)
    }
}

/// Animatable field of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeProp {
    PositionX,
    PositionY,
    PositionZ,
    RotationX,
    RotationY,
    RotationZ,
    ScaleX,
    ScaleY,
    ScaleZ,
    Opacity,
    Size,
    /// Hue in degrees; writes wrap into `[0, 360)`.
    Hue,
    /// `>= 0.5` is visible.
    Visible,
}

impl NodeProp {
    pub const POSITION: [NodeProp; 3] = [NodeProp::PositionX, NodeProp::PositionY, NodeProp::PositionZ];
    pub const ROTATION: [NodeProp; 3] = [NodeProp::RotationX, NodeProp::RotationY, NodeProp::RotationZ];
    pub const SCALE: [NodeProp; 3] = [NodeProp::ScaleX, NodeProp::ScaleY, NodeProp::ScaleZ];
}

pub type NodeKey = (NodeId, NodeProp);

/// Position keys of `node`, for wanders and paths.
pub fn position_keys(node: NodeId) -> Vec<NodeKey> {
    NodeProp::POSITION.iter().map(|p| (node, *p)).collect()
}

pub fn scale_keys(node: NodeId) -> Vec<NodeKey> {
    NodeProp::SCALE.iter().map(|p| (node, *p)).collect()
}

/// Linear fog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fog {
    pub color: Hsl,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: HashMap<NodeId, Node>,
    roots: Vec<NodeId>,
    next_id: u32,
    pub fog: Option<Fog>,
    pub background: Option<Hsl>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` under `parent` (or as a root). A missing parent makes
    /// the node a root.
    pub fn add(&mut self, parent: Option<NodeId>, mut node: Node) -> NodeId {
        self.next_id += 1;
        let id = NodeId(self.next_id);
        let parent = parent.filter(|p| self.nodes.contains_key(p));
        node.parent = parent;
        node.children.clear();
        match parent.and_then(|p| self.nodes.get_mut(&p)) {
            Some(p) => p.children.push(id),
            None => self.roots.push(id),
        }
        self.nodes.insert(id, node);
        id
    }

    /// Remove `id` and its subtree. Returns the resources the removed
    /// meshes referenced; the caller decides whether to release them.
    pub fn remove(&mut self, id: NodeId) -> Vec<ResourceId> {
        let Some(parent) = self.nodes.get(&id).map(|n| n.parent) else {
            return Vec::new();
        };
        match parent.and_then(|p| self.nodes.get_mut(&p)) {
            Some(parent) => parent.children.retain(|c| *c != id),
            None => self.roots.retain(|r| *r != id),
        }

        let mut resources = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                resources.extend(node.kind.resources());
                stack.extend(node.children);
            }
        }
        resources
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
        self.fog = None;
        self.background = None;
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Nodes in depth-first order, parents before children.
    pub fn walk(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        out
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.walk()
            .into_iter()
            .find(|id| self.nodes.get(id).is_some_and(|n| n.name == name))
    }

    /// Every resource referenced by a node still in the graph.
    pub fn referenced_resources(&self) -> Vec<ResourceId> {
        let mut ids: Vec<ResourceId> = self.nodes.values().flat_map(|n| n.kind.resources()).collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Turn `id` so its +z axis points at `target`, given in the parent's space.
    pub fn look_at(&mut self, id: NodeId, target: Vec3) {
        let Some(node) = self.nodes.get_mut(&id) else {
            return;
        };
        let d = target - node.position;
        let horizontal = (d.x * d.x + d.z * d.z).sqrt();
        if horizontal < f32::EPSILON && d.y.abs() < f32::EPSILON {
            return;
        }
        node.rotation = Vec3::new(-d.y.atan2(horizontal), d.x.atan2(d.z), 0.0);
    }

    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        let node = self.nodes.get(&id)?;
        let local = node.local_matrix();
        match node.parent {
            Some(parent) => Some(matrix::mul(&self.world_matrix(parent)?, &local)),
            None => Some(local),
        }
    }

    pub fn world_position(&self, id: NodeId) -> Option<Vec3> {
        self.world_matrix(id)
            .map(|m| matrix::transform_point(&m, Vec3::ZERO))
    }

    /// Visible unless the node or an ancestor is hidden.
    pub fn is_visible(&self, id: NodeId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            match self.nodes.get(&current) {
                Some(node) if node.visible => cursor = node.parent,
                _ => return false,
            }
        }
        true
    }
}

impl Animatable<NodeKey> for SceneGraph {
    fn get(&self, (id, prop): NodeKey) -> Option<f32> {
        let node = self.nodes.get(&id)?;
        Some(match prop {
            NodeProp::PositionX => node.position.x,
            NodeProp::PositionY => node.position.y,
            NodeProp::PositionZ => node.position.z,
            NodeProp::RotationX => node.rotation.x,
            NodeProp::RotationY => node.rotation.y,
            NodeProp::RotationZ => node.rotation.z,
            NodeProp::ScaleX => node.scale.x,
            NodeProp::ScaleY => node.scale.y,
            NodeProp::ScaleZ => node.scale.z,
            NodeProp::Opacity => node.opacity,
            NodeProp::Size => node.size,
            NodeProp::Hue => node.color?.h,
            NodeProp::Visible => {
                if node.visible {
                    1.0
                } else {
                    0.0
                }
            }
        })
    }

    fn set(&mut self, (id, prop): NodeKey, value: f32) {
        let Some(node) = self.nodes.get_mut(&id) else {
            return;
        };
        match prop {
            NodeProp::PositionX => node.position.x = value,
            NodeProp::PositionY => node.position.y = value,
            NodeProp::PositionZ => node.position.z = value,
            NodeProp::RotationX => node.rotation.x = value,
            NodeProp::RotationY => node.rotation.y = value,
            NodeProp::RotationZ => node.rotation.z = value,
            NodeProp::ScaleX => node.scale.x = value,
            NodeProp::ScaleY => node.scale.y = value,
            NodeProp::ScaleZ => node.scale.z = value,
            NodeProp::Opacity => node.opacity = value,
            NodeProp::Size => node.size = value,
            NodeProp::Hue => {
                if let Some(color) = node.color.as_mut() {
                    *color = Hsl::new(value, color.s, color.l).with_alpha(color.a);
                }
            }
            NodeProp::Visible => node.visible = value >= 0.5,
        }
    }
}
