use glam::Vec2;
use neuralwave_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn wide_profile() -> DisplayProfile {
    DisplayProfile {
        viewport_width_px: 1280,
        high_density: true,
    }
}

#[test]
fn counts_follow_viewport_width() {
    let narrow = DisplayProfile {
        viewport_width_px: 500,
        high_density: true,
    };
    assert_eq!(ShapeField::new(&narrow, &mut rng(1)).shapes.len(), 5);
    assert_eq!(ShapeField::new(&wide_profile(), &mut rng(1)).shapes.len(), 10);
}

#[test]
fn no_pointer_leaves_parallax_axes_untouched() {
    let mut field = ShapeField::new(&wide_profile(), &mut rng(4));
    let before: Vec<(f32, f32)> = field.shapes.iter().map(|s| (s.position.x, s.position.z)).collect();
    field.update(16.7, None);
    for (shape, (x, z)) in field.shapes.iter().zip(&before) {
        assert_eq!(shape.position.x, *x);
        assert_eq!(shape.position.z, *z);
    }
}

#[test]
fn pointer_pulls_x_and_z_with_decayed_target() {
    let mut field = ShapeField::new(&wide_profile(), &mut rng(4));
    let snapshot: Vec<Shape> = field.shapes.clone();
    let pointer = Vec2::new(0.75, -0.5);
    field.update(16.7, Some(pointer));
    for (after, before) in field.shapes.iter().zip(&snapshot) {
        let expected_x = before.position.x
            + (pointer.x * before.parallax_strength - before.position.x * PARALLAX_DECAY)
                * PARALLAX_BLEND;
        let expected_z = before.position.z
            + (pointer.y * before.parallax_strength - before.position.z * PARALLAX_DECAY)
                * PARALLAX_BLEND;
        assert!((after.position.x - expected_x).abs() < 1e-6);
        assert!((after.position.z - expected_z).abs() < 1e-6);
    }
}

#[test]
fn rotation_advances_by_rotation_speed() {
    let mut field = ShapeField::new(&wide_profile(), &mut rng(8));
    let snapshot: Vec<Shape> = field.shapes.clone();
    field.update(16.7, None);
    for (after, before) in field.shapes.iter().zip(&snapshot) {
        let expected = before.rotation + before.rotation_speed;
        assert!((after.rotation - expected).length() < 1e-6);
    }
}

#[test]
fn vertical_bob_stays_within_float_range() {
    let mut field = ShapeField::new(&wide_profile(), &mut rng(12));
    for frame in 0..600 {
        field.update(frame as f64 * 16.7, None);
        for shape in &field.shapes {
            assert!((shape.position.y - shape.initial_y).abs() <= shape.float_range + 1e-4);
        }
    }
}

#[test]
fn motion_parameters_are_fixed_after_construction() {
    let mut field = ShapeField::new(&wide_profile(), &mut rng(6));
    let snapshot: Vec<Shape> = field.shapes.clone();
    for frame in 0..90 {
        field.update(frame as f64 * 16.7, Some(Vec2::new(0.3, 0.3)));
    }
    for (after, before) in field.shapes.iter().zip(&snapshot) {
        assert_eq!(after.phase, before.phase);
        assert_eq!(after.float_speed, before.float_speed);
        assert_eq!(after.float_range, before.float_range);
        assert_eq!(after.parallax_strength, before.parallax_strength);
        assert_eq!(after.rotation_speed, before.rotation_speed);
        assert_eq!(after.wireframe, before.wireframe);
        assert_eq!(after.kind, before.kind);
    }
}

#[test]
fn opacity_pulses_but_never_goes_negative() {
    let mut field = ShapeField::new(&wide_profile(), &mut rng(3));
    for frame in 0..600 {
        field.update(frame as f64 * 16.7, None);
        for shape in &field.shapes {
            assert!(shape.opacity >= 0.0);
            assert!(shape.opacity <= SHAPE_OPACITY_BASE + SHAPE_OPACITY_AMPLITUDE + 1e-6);
        }
    }
}

#[test]
fn dispose_is_idempotent_and_safe_on_empty() {
    let mut field = ShapeField::new(&wide_profile(), &mut rng(2));
    field.dispose();
    assert!(field.shapes.is_empty());
    field.update(16.7, Some(Vec2::ONE));
    field.dispose();
    assert!(field.shapes.is_empty());
}
