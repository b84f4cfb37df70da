use neuralwave_core::geometry::{cone, cuboid, sphere, tetrahedron, torus, Mesh};
use neuralwave_core::shapes::ShapeKind;
use std::collections::HashSet;

fn assert_indices_in_range(mesh: &Mesh) {
    assert!(!mesh.positions.is_empty());
    assert!(!mesh.indices.is_empty());
    assert_eq!(mesh.indices.len() % 3, 0, "triangle list");
    let n = mesh.positions.len() as u32;
    for &i in &mesh.indices {
        assert!(i < n, "index {i} out of range {n}");
    }
}

#[test]
fn every_shape_kind_produces_a_valid_mesh() {
    for kind in ShapeKind::ALL {
        assert_indices_in_range(&Mesh::for_kind(kind));
    }
    assert_indices_in_range(&Mesh::node_sphere());
}

#[test]
fn sphere_grid_has_expected_vertex_count() {
    let mesh = sphere(1.0, 16, 16);
    assert_eq!(mesh.positions.len(), 17 * 17);
    assert_eq!(mesh.indices.len() as u32, 16 * 16 * 6);
}

#[test]
fn wireframe_edges_are_unique_pairs() {
    for kind in ShapeKind::ALL {
        let mesh = Mesh::for_kind(kind);
        let lines = mesh.wireframe_indices();
        assert_eq!(lines.len() % 2, 0);
        let mut seen = HashSet::new();
        for pair in lines.chunks_exact(2) {
            let key = (pair[0].min(pair[1]), pair[0].max(pair[1]));
            assert_ne!(pair[0], pair[1]);
            assert!(seen.insert(key), "duplicate edge {key:?}");
        }
    }
}

#[test]
fn cuboid_wireframe_covers_edges_and_face_diagonals() {
    // 12 box edges plus one diagonal per face from triangulation.
    let lines = cuboid(0.5).wireframe_indices();
    assert_eq!(lines.len(), 18 * 2);
}

#[test]
fn tetrahedron_has_six_unique_edges() {
    let lines = tetrahedron(0.4).wireframe_indices();
    assert_eq!(lines.len(), 6 * 2);
}

#[test]
fn cone_has_apex_and_base_center() {
    let mesh = cone(0.3, 0.6, 8);
    assert_eq!(mesh.positions[0], [0.0, 0.3, 0.0]);
    assert_eq!(*mesh.positions.last().unwrap(), [0.0, -0.3, 0.0]);
    // One side and one base triangle per segment.
    assert_eq!(mesh.indices.len(), 8 * 2 * 3);
}

#[test]
fn torus_vertices_lie_on_the_tube() {
    let ring = 0.3f32;
    let tube = 0.1f32;
    let mesh = torus(ring, tube, 16, 32);
    for p in &mesh.positions {
        let axis_dist = (p[0] * p[0] + p[1] * p[1]).sqrt();
        assert!(axis_dist >= ring - tube - 1e-5);
        assert!(axis_dist <= ring + tube + 1e-5);
        assert!(p[2].abs() <= tube + 1e-5);
    }
}
