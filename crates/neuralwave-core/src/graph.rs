//! Node-graph engine: a fixed set of oscillating point entities plus the
//! proximity links derived once from their initial positions. Topology is
//! static; only positions and appearance evolve per frame.

use crate::constants::*;
use crate::osc;
use crate::profile::DisplayProfile;
use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Debug)]
pub struct Node {
    pub position: Vec3,
    /// Fixed origin the oscillation orbits around.
    pub initial_position: Vec3,
    /// Reserved drift vector; sampled at construction, never integrated.
    pub velocity: Vec3,
    /// Random angle fixing this node's timing within the shared oscillators.
    /// Assigned once, never rewritten.
    pub phase: f32,
    pub rotation: Vec3,
    pub scale: f32,
    pub emissive: f32,
    pub color: [f32; 3],
}

/// A link between two nodes of the same graph, held as indices into the node
/// vector. Links read node positions every frame but never mutate nodes.
#[derive(Clone, Debug)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    /// Independent random angle for the opacity/color cycle.
    pub pulse_phase: f32,
    pub endpoints: [Vec3; 2],
    pub opacity: f32,
    pub color: [f32; 3],
}

pub struct NodeGraph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl NodeGraph {
    /// Sample `profile.node_count()` nodes on a spherical shell and derive
    /// the proximity links. The count is read once and fixed for the session.
    pub fn new(profile: &DisplayProfile, rng: &mut StdRng) -> Self {
        let count = profile.node_count();
        let mut positions = Vec::with_capacity(count);
        for _ in 0..count {
            let radius = NODE_SHELL_RADIUS_MIN + rng.gen::<f32>() * NODE_SHELL_RADIUS_SPAN;
            let theta = rng.gen::<f32>() * TAU;
            // Uniform in angle, not over the shell surface; the polar
            // clustering this produces is part of the look.
            let phi = rng.gen::<f32>() * PI;
            positions.push(Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            ));
        }
        Self::from_initial_positions(&positions, rng)
    }

    /// Build a graph from explicit initial positions. Links are computed here
    /// by exhaustive pairwise comparison on those positions, once; O(n^2)
    /// with n <= 80.
    pub fn from_initial_positions(positions: &[Vec3], rng: &mut StdRng) -> Self {
        let nodes: Vec<Node> = positions
            .iter()
            .map(|&p| Node {
                position: p,
                initial_position: p,
                velocity: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * NODE_DRIFT_SPAN,
                    (rng.gen::<f32>() - 0.5) * NODE_DRIFT_SPAN,
                    (rng.gen::<f32>() - 0.5) * NODE_DRIFT_SPAN,
                ),
                phase: rng.gen::<f32>() * TAU,
                rotation: Vec3::ZERO,
                scale: 1.0,
                emissive: NODE_EMISSIVE_INITIAL,
                color: PALETTE[rng.gen_range(0..PALETTE.len())],
            })
            .collect();

        let mut links = Vec::new();
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let dist = nodes[i]
                    .initial_position
                    .distance(nodes[j].initial_position);
                if dist < LINK_DISTANCE_MAX {
                    links.push(Link {
                        a: i,
                        b: j,
                        pulse_phase: rng.gen::<f32>() * TAU,
                        endpoints: [nodes[i].initial_position, nodes[j].initial_position],
                        opacity: LINK_OPACITY_BASE + LINK_OPACITY_AMPLITUDE,
                        color: PALETTE[0],
                    });
                }
            }
        }
        log::info!("[graph] nodes={} links={}", nodes.len(), links.len());
        Self { nodes, links }
    }

    /// Advance every node and link to the given wall-clock millisecond value.
    pub fn update(&mut self, now_ms: f64) {
        let t = osc::graph_time(now_ms);
        for node in &mut self.nodes {
            node.position = node.initial_position + osc::node_float_offset(t, node.phase);
            node.rotation.x += NODE_SPIN_PER_FRAME;
            node.rotation.y += NODE_SPIN_PER_FRAME;
            node.scale = osc::node_pulse_scale(t, node.phase);
            node.emissive = osc::node_emissive(t, node.phase);
        }
        for link in &mut self.links {
            // Endpoints re-read the already-updated node positions; the
            // topology itself stays fixed.
            link.endpoints = [self.nodes[link.a].position, self.nodes[link.b].position];
            link.opacity = osc::link_opacity(t, link.pulse_phase);
            link.color = osc::link_color(t, link.pulse_phase);
        }
    }

    /// Drop every node and link together. Idempotent; the renderers rebuild
    /// their buffers from these collections each frame, so an empty graph
    /// submits nothing.
    pub fn dispose(&mut self) {
        self.nodes.clear();
        self.links.clear();
    }
}
