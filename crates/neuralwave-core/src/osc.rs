//! Phase-driven oscillators shared by the graph and the shape field.
//!
//! Every function is a pure map from an explicit time value (plus a fixed
//! per-entity phase) to a scalar or color, so the entity systems stay
//! deterministic and testable without real timers.

use crate::constants::*;
use glam::Vec3;

/// Convert a wall-clock millisecond value into graph oscillator time.
#[inline]
pub fn graph_time(now_ms: f64) -> f32 {
    (now_ms * ANIMATION_SPEED) as f32
}

/// Per-axis sinusoidal drift around a node's initial position.
///
/// The three axes deliberately use different phase multipliers so a single
/// random phase yields an irregular-looking orbit.
#[inline]
pub fn node_float_offset(t: f32, phase: f32) -> Vec3 {
    Vec3::new(
        (t + phase).sin(),
        (t + phase * 1.5).cos(),
        (t + phase * 0.5).sin(),
    ) * NODE_FLOAT_AMPLITUDE
}

/// Pulsing uniform scale factor; exactly 1.0 at t = 0, phase = 0.
#[inline]
pub fn node_pulse_scale(t: f32, phase: f32) -> f32 {
    1.0 + (t * 2.0 + phase).sin() * NODE_SCALE_AMPLITUDE
}

/// Emissive brightness; exactly `NODE_EMISSIVE_BASE` at t = 0, phase = 0.
#[inline]
pub fn node_emissive(t: f32, phase: f32) -> f32 {
    NODE_EMISSIVE_BASE + (t * 3.0 + phase).sin() * NODE_EMISSIVE_AMPLITUDE
}

#[inline]
pub fn link_opacity(t: f32, pulse_phase: f32) -> f32 {
    LINK_OPACITY_BASE + (t * 2.0 + pulse_phase).sin() * LINK_OPACITY_AMPLITUDE
}

/// Cycling link color: hue wraps once per oscillator time unit and is mapped
/// into a narrow band at the cool end of the spectrum, full saturation, mid
/// lightness.
#[inline]
pub fn link_color(t: f32, pulse_phase: f32) -> [f32; 3] {
    let hue = fract(t + pulse_phase) * LINK_HUE_SPAN + LINK_HUE_OFFSET;
    hsl_to_rgb(hue, 1.0, 0.5)
}

#[inline]
pub fn shape_opacity(now_ms: f64, phase: f32) -> f32 {
    SHAPE_OPACITY_BASE
        + ((now_ms * SHAPE_OPACITY_TIME_SCALE) as f32 + phase).sin() * SHAPE_OPACITY_AMPLITUDE
}

#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// HSL to RGB, all channels in [0, 1]. Hue wraps.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = fract(h);
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = fract(t);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
