//! CPU-side packing of entity state into GPU-visible instance and vertex
//! data, shared by the web and native renderers. Opacities are clamped at
//! zero here so the shader never sees a negative alpha.

use crate::constants::{NODE_OPACITY, SHAPE_EMISSIVE};
use crate::graph::NodeGraph;
use crate::shapes::{Shape, ShapeField};
use glam::{EulerRot, Mat4, Quat, Vec3};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshInstance {
    pub model: [[f32; 4]; 4],
    /// rgb + alpha
    pub color: [f32; 4],
    /// x: emissive intensity; y..w reserved
    pub params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

pub fn node_instances(graph: &NodeGraph) -> Vec<MeshInstance> {
    graph
        .nodes
        .iter()
        .map(|n| {
            let rotation =
                Quat::from_euler(EulerRot::XYZ, n.rotation.x, n.rotation.y, n.rotation.z);
            MeshInstance {
                model: Mat4::from_scale_rotation_translation(
                    Vec3::splat(n.scale),
                    rotation,
                    n.position,
                )
                .to_cols_array_2d(),
                color: [n.color[0], n.color[1], n.color[2], NODE_OPACITY],
                params: [n.emissive.max(0.0), 0.0, 0.0, 0.0],
            }
        })
        .collect()
}

/// Link segments as a line list, two vertices per link.
pub fn link_vertices(graph: &NodeGraph) -> Vec<LineVertex> {
    let mut out = Vec::with_capacity(graph.links.len() * 2);
    for link in &graph.links {
        let color = [
            link.color[0],
            link.color[1],
            link.color[2],
            link.opacity.max(0.0),
        ];
        for p in link.endpoints {
            out.push(LineVertex {
                position: p.to_array(),
                color,
            });
        }
    }
    out
}

/// Shape instances grouped by geometry kind and split into solid and
/// wireframe batches, so each non-empty batch maps to one instanced draw.
#[derive(Default)]
pub struct ShapeBatches {
    pub solid: [Vec<MeshInstance>; 5],
    pub wire: [Vec<MeshInstance>; 5],
}

pub fn shape_batches(field: &ShapeField) -> ShapeBatches {
    let mut batches = ShapeBatches::default();
    for shape in &field.shapes {
        let idx = shape.kind as usize;
        let instance = shape_instance(shape);
        if shape.wireframe {
            batches.wire[idx].push(instance);
        } else {
            batches.solid[idx].push(instance);
        }
    }
    batches
}

fn shape_instance(shape: &Shape) -> MeshInstance {
    let rotation = Quat::from_euler(
        EulerRot::XYZ,
        shape.rotation.x,
        shape.rotation.y,
        shape.rotation.z,
    );
    MeshInstance {
        model: Mat4::from_rotation_translation(rotation, shape.position).to_cols_array_2d(),
        color: [
            shape.color[0],
            shape.color[1],
            shape.color[2],
            shape.opacity.max(0.0),
        ],
        params: [SHAPE_EMISSIVE, 0.0, 0.0, 0.0],
    }
}
