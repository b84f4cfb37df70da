//! Viewport/display-density signals, read once at construction to size the
//! entity sets. Counts are fixed for the session after that.

use crate::constants::*;

#[derive(Clone, Copy, Debug)]
pub struct DisplayProfile {
    /// Viewport width in device-independent pixels.
    pub viewport_width_px: u32,
    /// Whether the display reports at least 2 dots per device-independent
    /// pixel (the original's `min-resolution: 2dppx` media query).
    pub high_density: bool,
}

impl DisplayProfile {
    #[inline]
    pub fn is_narrow(&self) -> bool {
        self.viewport_width_px < NARROW_VIEWPORT_PX
    }

    /// 30 on narrow viewports, 50 on low-density displays, 80 otherwise.
    pub fn node_count(&self) -> usize {
        if self.is_narrow() {
            NODE_COUNT_NARROW
        } else if !self.high_density {
            NODE_COUNT_LOW_DENSITY
        } else {
            NODE_COUNT_FULL
        }
    }

    /// 5 on narrow viewports, 10 otherwise.
    pub fn shape_count(&self) -> usize {
        if self.is_narrow() {
            SHAPE_COUNT_NARROW
        } else {
            SHAPE_COUNT_WIDE
        }
    }
}
