use neuralwave_core::DisplayProfile;

#[test]
fn narrow_viewport_gets_thirty_nodes_and_five_shapes() {
    let profile = DisplayProfile {
        viewport_width_px: 767,
        high_density: true,
    };
    assert_eq!(profile.node_count(), 30);
    assert_eq!(profile.shape_count(), 5);
}

#[test]
fn narrow_wins_over_density() {
    let profile = DisplayProfile {
        viewport_width_px: 400,
        high_density: false,
    };
    assert_eq!(profile.node_count(), 30);
    assert_eq!(profile.shape_count(), 5);
}

#[test]
fn wide_high_density_gets_full_counts() {
    let profile = DisplayProfile {
        viewport_width_px: 1920,
        high_density: true,
    };
    assert_eq!(profile.node_count(), 80);
    assert_eq!(profile.shape_count(), 10);
}

#[test]
fn wide_low_density_gets_fifty_nodes() {
    let profile = DisplayProfile {
        viewport_width_px: 1024,
        high_density: false,
    };
    assert_eq!(profile.node_count(), 50);
    assert_eq!(profile.shape_count(), 10);
}

#[test]
fn width_threshold_is_inclusive_at_768() {
    let profile = DisplayProfile {
        viewport_width_px: 768,
        high_density: true,
    };
    assert!(!profile.is_narrow());
    assert_eq!(profile.node_count(), 80);
}
