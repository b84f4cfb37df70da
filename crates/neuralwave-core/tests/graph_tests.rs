use glam::Vec3;
use neuralwave_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn full_profile() -> DisplayProfile {
    DisplayProfile {
        viewport_width_px: 1440,
        high_density: true,
    }
}

#[test]
fn links_are_unique_pairs_within_threshold() {
    let graph = NodeGraph::new(&full_profile(), &mut rng(7));
    let mut seen = HashSet::new();
    for link in &graph.links {
        assert_ne!(link.a, link.b, "self-link");
        let key = (link.a.min(link.b), link.a.max(link.b));
        assert!(seen.insert(key), "duplicate link {key:?}");
        let d = graph.nodes[link.a]
            .initial_position
            .distance(graph.nodes[link.b].initial_position);
        assert!(d < LINK_DISTANCE_MAX, "link spans {d} units");
    }
}

#[test]
fn construction_is_reproducible_from_seed() {
    let g1 = NodeGraph::new(&full_profile(), &mut rng(42));
    let g2 = NodeGraph::new(&full_profile(), &mut rng(42));
    assert_eq!(g1.nodes.len(), g2.nodes.len());
    assert_eq!(g1.links.len(), g2.links.len());
    for (a, b) in g1.nodes.iter().zip(g2.nodes.iter()) {
        assert_eq!(a.initial_position, b.initial_position);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.color, b.color);
    }
}

#[test]
fn two_nodes_two_units_apart_yield_one_link() {
    let positions = [Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)];
    let graph = NodeGraph::from_initial_positions(&positions, &mut rng(1));
    assert_eq!(graph.links.len(), 1);
    assert_eq!((graph.links[0].a, graph.links[0].b), (0, 1));
}

#[test]
fn two_nodes_five_units_apart_yield_no_link() {
    let positions = [Vec3::ZERO, Vec3::new(5.0, 0.0, 0.0)];
    let graph = NodeGraph::from_initial_positions(&positions, &mut rng(1));
    assert!(graph.links.is_empty());
}

#[test]
fn phases_and_velocity_never_change_across_updates() {
    let mut graph = NodeGraph::new(&full_profile(), &mut rng(3));
    let node_phases: Vec<f32> = graph.nodes.iter().map(|n| n.phase).collect();
    let velocities: Vec<Vec3> = graph.nodes.iter().map(|n| n.velocity).collect();
    let link_phases: Vec<f32> = graph.links.iter().map(|l| l.pulse_phase).collect();
    for frame in 0..120 {
        graph.update(frame as f64 * 16.7);
    }
    for (node, phase) in graph.nodes.iter().zip(&node_phases) {
        assert_eq!(node.phase, *phase);
    }
    for (node, velocity) in graph.nodes.iter().zip(&velocities) {
        assert_eq!(node.velocity, *velocity);
    }
    for (link, phase) in graph.links.iter().zip(&link_phases) {
        assert_eq!(link.pulse_phase, *phase);
    }
}

#[test]
fn nodes_oscillate_around_initial_position() {
    let mut graph = NodeGraph::new(&full_profile(), &mut rng(9));
    for frame in 1..240 {
        graph.update(frame as f64 * 16.7);
        for node in &graph.nodes {
            let offset = node.position - node.initial_position;
            assert!(offset.x.abs() <= NODE_FLOAT_AMPLITUDE + 1e-5);
            assert!(offset.y.abs() <= NODE_FLOAT_AMPLITUDE + 1e-5);
            assert!(offset.z.abs() <= NODE_FLOAT_AMPLITUDE + 1e-5);
        }
    }
}

#[test]
fn links_track_updated_node_positions() {
    let positions = [Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0)];
    let mut graph = NodeGraph::from_initial_positions(&positions, &mut rng(5));
    graph.update(5000.0);
    let link = &graph.links[0];
    assert_eq!(link.endpoints[0], graph.nodes[link.a].position);
    assert_eq!(link.endpoints[1], graph.nodes[link.b].position);
}

#[test]
fn nodes_start_at_the_construction_emissive_intensity() {
    let mut graph = NodeGraph::new(&full_profile(), &mut rng(13));
    for node in &graph.nodes {
        assert_eq!(node.emissive, NODE_EMISSIVE_INITIAL);
    }
    // The first update hands the value over to the oscillator band.
    graph.update(0.0);
    for node in &graph.nodes {
        assert!(node.emissive <= NODE_EMISSIVE_BASE + NODE_EMISSIVE_AMPLITUDE + 1e-6);
        assert!(node.emissive >= NODE_EMISSIVE_BASE - NODE_EMISSIVE_AMPLITUDE - 1e-6);
    }
}

#[test]
fn link_opacity_and_emissive_stay_non_negative() {
    let mut graph = NodeGraph::new(&full_profile(), &mut rng(11));
    for frame in 0..600 {
        graph.update(frame as f64 * 16.7);
        for link in &graph.links {
            assert!(link.opacity >= 0.0);
            for c in link.color {
                assert!((0.0..=1.0).contains(&c));
            }
        }
        for node in &graph.nodes {
            assert!(node.emissive >= 0.0);
        }
    }
}

#[test]
fn empty_graph_update_and_dispose_are_safe() {
    let mut graph = NodeGraph::from_initial_positions(&[], &mut rng(1));
    graph.update(16.7);
    graph.dispose();
    assert!(graph.nodes.is_empty());
    assert!(graph.links.is_empty());
}

#[test]
fn dispose_is_idempotent() {
    let mut graph = NodeGraph::new(&full_profile(), &mut rng(2));
    assert!(!graph.nodes.is_empty());
    graph.dispose();
    assert!(graph.nodes.is_empty());
    assert!(graph.links.is_empty());
    graph.dispose();
    assert!(graph.nodes.is_empty());
    assert!(graph.links.is_empty());
}
