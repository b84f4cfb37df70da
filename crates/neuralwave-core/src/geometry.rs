//! Procedural unit meshes for the node spheres and the five ambient
//! primitives, plus unique-edge extraction for wireframe rendering.
//!
//! Meshes carry positions only; shading is unlit, so shared vertices between
//! faces are fine.

use crate::constants::NODE_RADIUS;
use crate::shapes::ShapeKind;
use fnv::FnvHashSet;
use std::f32::consts::TAU;

pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Unit mesh for an ambient shape kind, sized to match the original
    /// primitives (cube 0.5, tetra/octa radius 0.4, torus 0.3/0.1, cone
    /// 0.3 x 0.6).
    pub fn for_kind(kind: ShapeKind) -> Mesh {
        match kind {
            ShapeKind::Cube => cuboid(0.5),
            ShapeKind::Tetrahedron => tetrahedron(0.4),
            ShapeKind::Octahedron => octahedron(0.4),
            ShapeKind::Torus => torus(0.3, 0.1, 16, 32),
            ShapeKind::Cone => cone(0.3, 0.6, 8),
        }
    }

    /// Sphere used for graph nodes.
    pub fn node_sphere() -> Mesh {
        sphere(NODE_RADIUS, 16, 16)
    }

    /// Line-list indices for this mesh's unique undirected edges.
    pub fn wireframe_indices(&self) -> Vec<u32> {
        let mut seen: FnvHashSet<(u32, u32)> = FnvHashSet::default();
        let mut lines = Vec::new();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = (a.min(b), a.max(b));
                if seen.insert(key) {
                    lines.extend([key.0, key.1]);
                }
            }
        }
        lines
    }
}

pub fn sphere(radius: f32, segments: u32, rings: u32) -> Mesh {
    let mut positions = Vec::new();
    for r in 0..=rings {
        let phi = std::f32::consts::PI * r as f32 / rings as f32;
        for s in 0..=segments {
            let theta = TAU * s as f32 / segments as f32;
            positions.push([
                radius * phi.sin() * theta.cos(),
                radius * phi.cos(),
                radius * phi.sin() * theta.sin(),
            ]);
        }
    }
    let mut indices = Vec::new();
    let stride = segments + 1;
    for r in 0..rings {
        for s in 0..segments {
            let a = r * stride + s;
            let b = a + 1;
            let c = a + stride;
            let d = c + 1;
            indices.extend([a, c, b, b, c, d]);
        }
    }
    Mesh { positions, indices }
}

pub fn cuboid(size: f32) -> Mesh {
    let h = size * 0.5;
    let mut positions = Vec::with_capacity(8);
    for i in 0..8u32 {
        positions.push([
            if i & 1 != 0 { h } else { -h },
            if i & 2 != 0 { h } else { -h },
            if i & 4 != 0 { h } else { -h },
        ]);
    }
    // Two triangles per face, corners indexed by the bit pattern above.
    let indices = vec![
        0, 2, 1, 1, 2, 3, // -z
        4, 5, 6, 5, 7, 6, // +z
        0, 1, 4, 1, 5, 4, // -y
        2, 6, 3, 3, 6, 7, // +y
        0, 4, 2, 2, 4, 6, // -x
        1, 3, 5, 3, 7, 5, // +x
    ];
    Mesh { positions, indices }
}

pub fn tetrahedron(radius: f32) -> Mesh {
    let s = radius / 3.0_f32.sqrt();
    let positions = vec![
        [s, s, s],
        [s, -s, -s],
        [-s, s, -s],
        [-s, -s, s],
    ];
    let indices = vec![0, 1, 2, 0, 3, 1, 0, 2, 3, 1, 3, 2];
    Mesh { positions, indices }
}

pub fn octahedron(radius: f32) -> Mesh {
    let r = radius;
    let positions = vec![
        [r, 0.0, 0.0],
        [-r, 0.0, 0.0],
        [0.0, r, 0.0],
        [0.0, -r, 0.0],
        [0.0, 0.0, r],
        [0.0, 0.0, -r],
    ];
    let indices = vec![
        0, 2, 4, 2, 1, 4, 1, 3, 4, 3, 0, 4, //
        2, 0, 5, 1, 2, 5, 3, 1, 5, 0, 3, 5,
    ];
    Mesh { positions, indices }
}

pub fn torus(ring_radius: f32, tube_radius: f32, radial_segments: u32, tubular_segments: u32) -> Mesh {
    let mut positions = Vec::new();
    for j in 0..=radial_segments {
        let v = TAU * j as f32 / radial_segments as f32;
        for i in 0..=tubular_segments {
            let u = TAU * i as f32 / tubular_segments as f32;
            let d = ring_radius + tube_radius * v.cos();
            positions.push([d * u.cos(), d * u.sin(), tube_radius * v.sin()]);
        }
    }
    let mut indices = Vec::new();
    let stride = tubular_segments + 1;
    for j in 0..radial_segments {
        for i in 0..tubular_segments {
            let a = j * stride + i;
            let b = a + 1;
            let c = a + stride;
            let d = c + 1;
            indices.extend([a, c, b, b, c, d]);
        }
    }
    Mesh { positions, indices }
}

pub fn cone(radius: f32, height: f32, segments: u32) -> Mesh {
    let half = height * 0.5;
    let mut positions = vec![[0.0, half, 0.0]]; // apex
    for s in 0..segments {
        let theta = TAU * s as f32 / segments as f32;
        positions.push([radius * theta.cos(), -half, radius * theta.sin()]);
    }
    positions.push([0.0, -half, 0.0]); // base center
    let base_center = segments + 1;
    let mut indices = Vec::new();
    for s in 0..segments {
        let a = 1 + s;
        let b = 1 + (s + 1) % segments;
        indices.extend([0, b, a]); // side
        indices.extend([base_center, a, b]); // base
    }
    Mesh { positions, indices }
}
