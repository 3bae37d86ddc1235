use crate::numeric::round_to;
use tracing::debug;

/// Pan never moves past the origin.
pub const LEFT_BOUNDARY: f64 = 0.0;

/// Continuous zoom/pan state selecting the visible index window.
///
/// `zoom` is conceptually ≥ 1: values below 1 snap back to native scale with
/// the pan reset, either on the next zoom event or at the start of the next
/// render pass. `pan` is ≤ 0 once settled: zero shows the start of the
/// buffer, more negative values scroll right. The right boundary depends on
/// the current zoom and the drawing-area width and is refreshed at the start
/// of every render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub pan: f64,
    right_boundary: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: 0.0,
            right_boundary: 0.0,
        }
    }

    pub fn right_boundary(&self) -> f64 {
        self.right_boundary
    }

    /// Zoom as used by the window math; the sub-1 transient never widens the
    /// index range past native scale.
    pub fn effective_zoom(&self) -> f64 {
        if self.zoom < 1.0 {
            1.0
        } else {
            self.zoom
        }
    }

    /// Width of the virtual canvas at the current zoom.
    pub fn scaled_width(&self, area_width: f64) -> f64 {
        round_to(area_width * self.zoom, 0)
    }

    /// Refreshes the right pan boundary from the current zoom and area width.
    pub fn update_boundaries(&mut self, area_width: f64) {
        self.right_boundary = -(self.scaled_width(area_width) - area_width);
    }

    /// Clamp rule for a proposed pan value, applied against the PRE-mutation
    /// state: a pan already past a boundary is forced back onto it, otherwise
    /// the proposal is accepted as-is. Overshoot can survive one event but
    /// never compounds, and an exact boundary landing stays reachable.
    pub fn check_pan(&self, proposed: f64) -> f64 {
        if self.pan > LEFT_BOUNDARY {
            return LEFT_BOUNDARY;
        }
        if self.pan < self.right_boundary {
            return self.right_boundary;
        }
        proposed
    }

    pub fn set_pan(&mut self, proposed: f64) {
        self.pan = self.check_pan(proposed);
    }

    /// Zoom delta with the sub-1 snap rule: when the current zoom already
    /// sits below native scale the state resets instead of applying the
    /// delta.
    pub fn adjust_zoom(&mut self, delta: f64) {
        if self.zoom < 1.0 {
            self.zoom = 1.0;
            self.pan = 0.0;
            return;
        }
        self.zoom += delta;
    }

    /// Render-entry guard. Returns `false` when drawing must be skipped for
    /// this frame: the zoom dipped below 1 (state snapped back to native
    /// scale) or the pan sits outside the boundaries (clamped back on). The
    /// state is valid again once this returns, so at most one frame in a row
    /// is skipped per cause.
    pub fn settle(&mut self, area_width: f64) -> bool {
        self.update_boundaries(area_width);
        if self.zoom < 1.0 {
            debug!(zoom = self.zoom, "zoom below native scale, snapping viewport");
            self.zoom = 1.0;
            self.pan = 0.0;
            return false;
        }
        if self.pan > LEFT_BOUNDARY || self.pan < self.right_boundary {
            debug!(
                pan = self.pan,
                right_boundary = self.right_boundary,
                "pan outside boundaries, clamping and skipping frame"
            );
            // Rounding of the scaled width can leave the right boundary a
            // fraction above zero; the pannable room is empty then.
            let lower = self.right_boundary.min(LEFT_BOUNDARY);
            self.pan = self.pan.clamp(lower, LEFT_BOUNDARY);
            return false;
        }
        true
    }
}
