//! Animation and construction tuning constants.
//!
//! These constants express intended behavior (amplitudes, offsets, count
//! heuristics) and keep magic numbers out of the entity systems. Every
//! opacity/emissive formula keeps its offset >= its amplitude so the result
//! can never go negative.

// Shared three-color palette (cyan, magenta, purple). All entity kinds draw
// from this set; the hues are part of the visual identity.
pub const PALETTE: [[f32; 3]; 3] = [
    [0.0, 0.851, 1.0],     // #00D9FF
    [1.0, 0.0, 0.431],     // #FF006E
    [0.514, 0.220, 0.925], // #8338EC
];

// Background clear color (#0a0a0f)
pub const CLEAR_COLOR: [f64; 3] = [0.039, 0.039, 0.059];

// Scene lighting: a white ambient term plus two accent point lights at
// opposite front corners, cyan upper-right and magenta lower-left, with
// linear distance falloff out to ACCENT_LIGHT_RANGE.
pub const AMBIENT_LIGHT_INTENSITY: f32 = 0.5;
pub const ACCENT_LIGHT_POSITIONS: [[f32; 3]; 2] = [[10.0, 10.0, 10.0], [-10.0, -10.0, 10.0]];
pub const ACCENT_LIGHT_HUES: [[f32; 3]; 2] = [PALETTE[0], PALETTE[1]];
pub const ACCENT_LIGHT_INTENSITY: f32 = 2.0;
pub const ACCENT_LIGHT_RANGE: f32 = 50.0;

// Linear depth fog toward CLEAR_COLOR
pub const FOG_NEAR: f32 = 10.0;
pub const FOG_FAR: f32 = 50.0;

// Graph time scale: wall-clock milliseconds -> oscillator time
pub const ANIMATION_SPEED: f64 = 0.0005;

// Node placement: spherical shell, radius in [MIN, MIN + SPAN)
pub const NODE_SHELL_RADIUS_MIN: f32 = 5.0;
pub const NODE_SHELL_RADIUS_SPAN: f32 = 5.0;

// Node visual
pub const NODE_RADIUS: f32 = 0.08;
pub const NODE_OPACITY: f32 = 0.8;
pub const NODE_SPIN_PER_FRAME: f32 = 0.01;

// Node oscillation
pub const NODE_FLOAT_AMPLITUDE: f32 = 0.5;
pub const NODE_SCALE_AMPLITUDE: f32 = 0.2;
pub const NODE_EMISSIVE_BASE: f32 = 0.3;
pub const NODE_EMISSIVE_AMPLITUDE: f32 = 0.2;
// Material-construction intensity, visible until the first update
pub const NODE_EMISSIVE_INITIAL: f32 = 0.5;

// Reserved per-node drift span (sampled but not integrated)
pub const NODE_DRIFT_SPAN: f32 = 0.02;

// Links connect node pairs whose *initial* positions are closer than this
pub const LINK_DISTANCE_MAX: f32 = 3.0;
pub const LINK_OPACITY_BASE: f32 = 0.1;
pub const LINK_OPACITY_AMPLITUDE: f32 = 0.1;
// Cycling hue is mapped into [HUE_OFFSET, HUE_OFFSET + HUE_SPAN)
pub const LINK_HUE_SPAN: f32 = 0.3;
pub const LINK_HUE_OFFSET: f32 = 0.5;

// Ambient shape placement box, centered near the camera forward axis
pub const SHAPE_SPREAD_XY: f32 = 30.0;
pub const SHAPE_SPREAD_Z: f32 = 20.0;
pub const SHAPE_Z_BIAS: f32 = -10.0;

// Ambient shape motion parameter ranges
pub const SHAPE_ROTATION_SPEED_SPAN: f32 = 0.02;
pub const SHAPE_FLOAT_SPEED_MIN: f32 = 0.0005;
pub const SHAPE_FLOAT_SPEED_SPAN: f32 = 0.001;
pub const SHAPE_FLOAT_RANGE_MIN: f32 = 1.0;
pub const SHAPE_FLOAT_RANGE_SPAN: f32 = 2.0;
pub const SHAPE_PARALLAX_MIN: f32 = 1.0;
pub const SHAPE_PARALLAX_SPAN: f32 = 2.0;

// Ambient shape appearance
pub const SHAPE_EMISSIVE: f32 = 0.3;
pub const SHAPE_OPACITY_BASE: f32 = 0.2;
pub const SHAPE_OPACITY_AMPLITUDE: f32 = 0.1;
pub const SHAPE_OPACITY_TIME_SCALE: f64 = 0.001;

// Pointer parallax blend: each frame the position moves 5% of the way toward
// the pointer target, after subtracting a 1% self-decay of the current value.
pub const PARALLAX_BLEND: f32 = 0.05;
pub const PARALLAX_DECAY: f32 = 0.01;

// Camera
pub const CAMERA_Z: f32 = 15.0;
pub const CAMERA_FOVY_RADIANS: f32 = 75.0 * std::f32::consts::PI / 180.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const CAMERA_PARALLAX_SCALE: f32 = 2.0;
pub const CAMERA_BLEND: f32 = 0.05;

// Entity count heuristics, read once at construction
pub const NARROW_VIEWPORT_PX: u32 = 768;
pub const NODE_COUNT_NARROW: usize = 30;
pub const NODE_COUNT_LOW_DENSITY: usize = 50;
pub const NODE_COUNT_FULL: usize = 80;
pub const SHAPE_COUNT_NARROW: usize = 5;
pub const SHAPE_COUNT_WIDE: usize = 10;
