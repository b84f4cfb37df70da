//! Scene composition: owns the two entity systems and the smoothed camera
//! offset, advanced strictly in sequence by `step`. The frame drivers own
//! the scheduling primitive (rAF / winit) and call `step` once per tick, so
//! tests can single-step frames deterministically.

use crate::camera::{smooth_camera_offset, Camera};
use crate::constants::*;
use crate::graph::NodeGraph;
use crate::profile::DisplayProfile;
use crate::shapes::ShapeField;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub struct SceneState {
    pub graph: NodeGraph,
    pub shapes: ShapeField,
    pub camera_offset: Vec2,
}

impl SceneState {
    /// Construct both entity systems from one seeded generator so a session
    /// is reproducible from its seed.
    pub fn new(profile: &DisplayProfile, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            graph: NodeGraph::new(profile, &mut rng),
            shapes: ShapeField::new(profile, &mut rng),
            camera_offset: Vec2::ZERO,
        }
    }

    /// Advance one frame. `now_ms` is computed once by the frame driver and
    /// shared by every oscillator; `pointer` is the latest normalized cursor
    /// offset, if any. Update order is graph, then shapes, then camera.
    pub fn step(&mut self, now_ms: f64, pointer: Option<Vec2>) {
        self.graph.update(now_ms);
        self.shapes.update(now_ms, pointer);
        if let Some(p) = pointer {
            self.camera_offset = smooth_camera_offset(self.camera_offset, p);
        }
    }

    /// Camera for the current frame, looking at the scene origin from the
    /// parallax-offset eye.
    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: Vec3::new(self.camera_offset.x, self.camera_offset.y, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Tear down both entity systems. Safe to call more than once and on a
    /// scene that never created anything.
    pub fn dispose(&mut self) {
        self.graph.dispose();
        self.shapes.dispose();
    }
}
