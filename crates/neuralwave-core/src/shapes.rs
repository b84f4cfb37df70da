//! Ambient shape field: free-floating decorative solids with independent
//! per-entity motion parameters and pointer parallax.

use crate::constants::*;
use crate::osc;
use crate::profile::DisplayProfile;
use glam::{Vec2, Vec3};
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Cube,
    Tetrahedron,
    Octahedron,
    Torus,
    Cone,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Cube,
        ShapeKind::Tetrahedron,
        ShapeKind::Octahedron,
        ShapeKind::Torus,
        ShapeKind::Cone,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Tetrahedron => "tetrahedron",
            ShapeKind::Octahedron => "octahedron",
            ShapeKind::Torus => "torus",
            ShapeKind::Cone => "cone",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Shape {
    pub kind: ShapeKind,
    pub wireframe: bool,
    pub color: [f32; 3],
    pub position: Vec3,
    pub rotation: Vec3,
    pub rotation_speed: Vec3,
    /// Vertical bob frequency, radians per wall-clock millisecond.
    pub float_speed: f32,
    pub float_range: f32,
    pub initial_y: f32,
    pub phase: f32,
    pub parallax_strength: f32,
    pub opacity: f32,
}

pub struct ShapeField {
    pub shapes: Vec<Shape>,
}

impl ShapeField {
    /// Sample `profile.shape_count()` shapes in a box centered near the
    /// camera's forward axis, z biased backward. Count is fixed afterwards.
    pub fn new(profile: &DisplayProfile, rng: &mut StdRng) -> Self {
        let count = profile.shape_count();
        let shapes: Vec<Shape> = (0..count)
            .map(|_| {
                let position = Vec3::new(
                    (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD_XY,
                    (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD_XY,
                    (rng.gen::<f32>() - 0.5) * SHAPE_SPREAD_Z + SHAPE_Z_BIAS,
                );
                Shape {
                    kind: ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())],
                    wireframe: rng.gen::<f32>() > 0.5,
                    color: PALETTE[rng.gen_range(0..PALETTE.len())],
                    position,
                    rotation: Vec3::new(
                        rng.gen::<f32>() * PI,
                        rng.gen::<f32>() * PI,
                        rng.gen::<f32>() * PI,
                    ),
                    rotation_speed: Vec3::new(
                        (rng.gen::<f32>() - 0.5) * SHAPE_ROTATION_SPEED_SPAN,
                        (rng.gen::<f32>() - 0.5) * SHAPE_ROTATION_SPEED_SPAN,
                        (rng.gen::<f32>() - 0.5) * SHAPE_ROTATION_SPEED_SPAN,
                    ),
                    float_speed: SHAPE_FLOAT_SPEED_MIN + rng.gen::<f32>() * SHAPE_FLOAT_SPEED_SPAN,
                    float_range: SHAPE_FLOAT_RANGE_MIN + rng.gen::<f32>() * SHAPE_FLOAT_RANGE_SPAN,
                    initial_y: position.y,
                    phase: rng.gen::<f32>() * TAU,
                    parallax_strength: SHAPE_PARALLAX_MIN + rng.gen::<f32>() * SHAPE_PARALLAX_SPAN,
                    opacity: SHAPE_OPACITY_BASE + SHAPE_OPACITY_AMPLITUDE,
                }
            })
            .collect();
        log::info!("[shapes] count={}", shapes.len());
        Self { shapes }
    }

    /// Advance rotation, vertical bob and opacity; apply pointer parallax on
    /// x/z when a pointer offset is present. Without a pointer the parallax
    /// terms are left untouched.
    pub fn update(&mut self, now_ms: f64, pointer: Option<Vec2>) {
        for shape in &mut self.shapes {
            shape.rotation += shape.rotation_speed;
            shape.position.y = shape.initial_y
                + ((now_ms * shape.float_speed as f64) as f32 + shape.phase).sin()
                    * shape.float_range;
            if let Some(p) = pointer {
                // Smoothed pull toward the pointer target, with a 1% decay of
                // the current value folded into the target. Kept exactly as
                // shipped; dropping the decay term moves the settle point.
                shape.position.x += (p.x * shape.parallax_strength
                    - shape.position.x * PARALLAX_DECAY)
                    * PARALLAX_BLEND;
                shape.position.z += (p.y * shape.parallax_strength
                    - shape.position.z * PARALLAX_DECAY)
                    * PARALLAX_BLEND;
            }
            shape.opacity = osc::shape_opacity(now_ms, shape.phase);
        }
    }

    /// Drop the whole set together; shapes are never destroyed individually.
    pub fn dispose(&mut self) {
        self.shapes.clear();
    }
}
