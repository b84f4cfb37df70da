//! Camera description shared by the web and native frontends.

use crate::constants::*;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// One exponential-smoothing step pulling the camera's x/y offset toward the
/// pointer-derived target. The vertical axis is mirrored so moving the
/// pointer down lifts the camera.
#[inline]
pub fn smooth_camera_offset(offset: Vec2, pointer: Vec2) -> Vec2 {
    Vec2::new(
        offset.x + (pointer.x * CAMERA_PARALLAX_SCALE - offset.x) * CAMERA_BLEND,
        offset.y + (-pointer.y * CAMERA_PARALLAX_SCALE - offset.y) * CAMERA_BLEND,
    )
}
