//! Geometry descriptors and generated vertex data.
//!
//! Parametric shapes (boxes, polyhedra) are described by their parameters
//! and built by the backend; point fields and the merkaba carry their
//! vertices so they can be uploaded as-is.

use rand::Rng;

/// One vertex position.
///
/// Layout: position(vec3) = 12 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: [x, y, z],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolyhedronKind {
    Tetrahedron,
    Icosahedron,
    Octahedron,
}

impl PolyhedronKind {
    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.gen_range(0..3) {
            0 => Self::Tetrahedron,
            1 => Self::Icosahedron,
            _ => Self::Octahedron,
        }
    }

    pub fn faces(&self) -> usize {
        match self {
            Self::Tetrahedron => 4,
            Self::Octahedron => 8,
            Self::Icosahedron => 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeometryDesc {
    Box { size: f32, segments: u32 },
    Polyhedron {
        kind: PolyhedronKind,
        radius: f32,
        detail: u32,
    },
    /// Two interpenetrating tetrahedra.
    Merkaba { size: f32 },
    Points(Vec<Vertex>),
}

impl GeometryDesc {
    /// Vertices the backend will allocate for this geometry.
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Box { segments, .. } => {
                let side = *segments as usize + 1;
                6 * side * side
            }
            Self::Polyhedron { kind, detail, .. } => {
                let sub = *detail as usize + 1;
                kind.faces() * sub * sub * 3
            }
            Self::Merkaba { .. } => 24,
            Self::Points(points) => points.len(),
        }
    }

    pub fn byte_len(&self) -> usize {
        self.vertex_count() * std::mem::size_of::<Vertex>()
    }

    /// Upload-ready vertex bytes for shapes that carry their vertices.
    pub fn vertex_bytes(&self) -> Option<Vec<u8>> {
        match self {
            Self::Points(points) => Some(bytemuck::cast_slice(points).to_vec()),
            Self::Merkaba { size } => Some(bytemuck::cast_slice(&merkaba_vertices(*size)).to_vec()),
            _ => None,
        }
    }
}

/// Triangle list of a stella octangula whose corners sit at `size` from the origin.
pub fn merkaba_vertices(size: f32) -> Vec<Vertex> {
    let k = size / 3f32.sqrt();
    let up = [
        [k, k, k],
        [-k, -k, k],
        [-k, k, -k],
        [k, -k, -k],
    ];
    let down = up.map(|[x, y, z]| [-x, -y, -z]);
    let faces = [[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]];

    let mut vertices = Vec::with_capacity(24);
    for corners in [up, down] {
        for face in faces {
            for i in face {
                let [x, y, z] = corners[i];
                vertices.push(Vertex::new(x, y, z));
            }
        }
    }
    vertices
}

/// Random points in a box of half extents `container`.
///
/// x and y are uniform; z is biased toward the back by `rand^1.5`.
pub fn scatter_points(count: usize, container: [f32; 3], rng: &mut impl Rng) -> Vec<Vertex> {
    let [cx, cy, cz] = container;
    (0..count)
        .map(|_| {
            let x = -cx + rng.gen::<f32>() * 2.0 * cx;
            let y = -cy + rng.gen::<f32>() * 2.0 * cy;
            let z = -cz + rng.gen::<f32>().powf(1.5) * 2.0 * cz;
            Vertex::new(x, y, z)
        })
        .collect()
}
