use glam::{Vec2, Vec3};
use neuralwave_core::*;

fn wide_profile() -> DisplayProfile {
    DisplayProfile {
        viewport_width_px: 1920,
        high_density: true,
    }
}

#[test]
fn step_with_pointer_moves_camera_toward_target() {
    let mut scene = SceneState::new(&wide_profile(), 42);
    scene.step(0.0, Some(Vec2::new(1.0, 0.0)));
    // One blend step: 5% of the way toward x = 2.
    assert!((scene.camera_offset.x - 0.1).abs() < 1e-6);
    assert_eq!(scene.camera_offset.y, 0.0);
}

#[test]
fn camera_offset_unchanged_without_pointer() {
    let mut scene = SceneState::new(&wide_profile(), 42);
    scene.step(0.0, Some(Vec2::new(1.0, 1.0)));
    let offset = scene.camera_offset;
    scene.step(16.7, None);
    assert_eq!(scene.camera_offset, offset);
}

#[test]
fn camera_converges_to_scaled_pointer_target() {
    let mut scene = SceneState::new(&wide_profile(), 7);
    let pointer = Vec2::new(1.0, 0.5);
    for frame in 0..600 {
        scene.step(frame as f64 * 16.7, Some(pointer));
    }
    assert!((scene.camera_offset.x - pointer.x * CAMERA_PARALLAX_SCALE).abs() < 1e-3);
    assert!((scene.camera_offset.y + pointer.y * CAMERA_PARALLAX_SCALE).abs() < 1e-3);
}

#[test]
fn camera_looks_at_origin_from_fixed_depth() {
    let scene = SceneState::new(&wide_profile(), 1);
    let camera = scene.camera(16.0 / 9.0);
    assert_eq!(camera.target, Vec3::ZERO);
    assert_eq!(camera.eye.z, CAMERA_Z);
    assert!(camera.view_projection().is_finite());
}

#[test]
fn stepping_is_deterministic_for_equal_seeds() {
    let mut a = SceneState::new(&wide_profile(), 99);
    let mut b = SceneState::new(&wide_profile(), 99);
    for frame in 0..60 {
        let now = frame as f64 * 16.7;
        let pointer = Some(Vec2::new(0.2, -0.4));
        a.step(now, pointer);
        b.step(now, pointer);
    }
    for (na, nb) in a.graph.nodes.iter().zip(&b.graph.nodes) {
        assert_eq!(na.position, nb.position);
    }
    for (sa, sb) in a.shapes.shapes.iter().zip(&b.shapes.shapes) {
        assert_eq!(sa.position, sb.position);
    }
}

#[test]
fn dispose_clears_both_entity_systems() {
    let mut scene = SceneState::new(&wide_profile(), 5);
    assert!(!scene.graph.nodes.is_empty());
    assert!(!scene.shapes.shapes.is_empty());
    scene.dispose();
    assert!(scene.graph.nodes.is_empty());
    assert!(scene.graph.links.is_empty());
    assert!(scene.shapes.shapes.is_empty());
    scene.dispose();
    assert!(scene.graph.nodes.is_empty());
}

#[test]
fn instance_packing_matches_entity_counts() {
    let mut scene = SceneState::new(&wide_profile(), 21);
    scene.step(16.7, None);
    assert_eq!(node_instances(&scene.graph).len(), scene.graph.nodes.len());
    assert_eq!(
        link_vertices(&scene.graph).len(),
        scene.graph.links.len() * 2
    );
    let batches = shape_batches(&scene.shapes);
    let total: usize = batches
        .solid
        .iter()
        .chain(batches.wire.iter())
        .map(|b| b.len())
        .sum();
    assert_eq!(total, scene.shapes.shapes.len());
}
