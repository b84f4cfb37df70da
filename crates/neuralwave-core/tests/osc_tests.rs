use neuralwave_core::constants::*;
use neuralwave_core::osc::*;

#[test]
fn pulse_scale_is_exactly_one_at_time_zero() {
    assert_eq!(node_pulse_scale(0.0, 0.0), 1.0);
}

#[test]
fn emissive_is_exactly_base_at_time_zero() {
    assert_eq!(node_emissive(0.0, 0.0), NODE_EMISSIVE_BASE);
}

#[test]
fn graph_time_scales_milliseconds() {
    assert_eq!(graph_time(2000.0), 1.0);
    assert_eq!(graph_time(0.0), 0.0);
}

#[test]
fn oscillators_never_go_negative() {
    let mut phase = 0.0f32;
    while phase < 7.0 {
        let mut t = 0.0f32;
        while t < 20.0 {
            assert!(node_emissive(t, phase) >= 0.0);
            assert!(link_opacity(t, phase) >= 0.0);
            assert!(node_pulse_scale(t, phase) >= 1.0 - NODE_SCALE_AMPLITUDE - 1e-6);
            t += 0.37;
        }
        assert!(shape_opacity(phase as f64 * 1000.0, phase) >= 0.0);
        phase += 0.53;
    }
}

#[test]
fn fract_wraps_into_unit_interval() {
    assert_eq!(fract(1.25), 0.25);
    assert_eq!(fract(-0.25), 0.75);
    assert_eq!(fract(3.0), 0.0);
}

#[test]
fn hsl_to_rgb_hits_known_colors() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    assert!((red[0] - 1.0).abs() < 1e-6);
    assert!(red[1].abs() < 1e-6);
    assert!(red[2].abs() < 1e-6);
    let cyan = hsl_to_rgb(0.5, 1.0, 0.5);
    assert!((cyan[0] - 0.0).abs() < 1e-6);
    assert!((cyan[1] - 1.0).abs() < 1e-6);
    assert!((cyan[2] - 1.0).abs() < 1e-6);
    // Zero saturation collapses to gray regardless of hue.
    assert_eq!(hsl_to_rgb(0.37, 0.0, 0.25), [0.25, 0.25, 0.25]);
}

#[test]
fn link_color_stays_in_the_cool_band() {
    // Hue is mapped into [0.5, 0.8): cyan through violet, so blue always
    // dominates red.
    let mut t = 0.0f32;
    while t < 10.0 {
        let c = link_color(t, 1.3);
        assert!(c[2] >= c[0], "blue should dominate red, got {c:?}");
        for ch in c {
            assert!((0.0..=1.0).contains(&ch));
        }
        t += 0.11;
    }
}
