use crate::input::ArrowKey;
use crate::viewport::Viewport;

/// Wheel delta units per zoom unit.
const WHEEL_ZOOM_DIVISOR: f64 = 1000.0;
/// Zoom change per arrow key press.
const KEY_ZOOM_STEP: f64 = 0.1;
/// Pan change in pixels per arrow key press.
const KEY_PAN_STEP: f64 = 20.0;

/// Translates raw input deltas into viewport mutations, independent of the
/// host event loop to keep the logic testable.
pub struct ViewController;

impl ViewController {
    /// Wheel/scroll: the dominant axis decides between zoom (vertical) and
    /// pan (horizontal). Equal deltas change nothing.
    pub fn wheel(viewport: &mut Viewport, delta_x: f64, delta_y: f64) {
        if delta_y.abs() > delta_x.abs() {
            viewport.adjust_zoom(-delta_y / WHEEL_ZOOM_DIVISOR);
        }
        if delta_x.abs() > delta_y.abs() {
            viewport.set_pan(viewport.pan - delta_x);
        }
    }

    /// Pointer or synthetic touch drag while the gesture is active.
    pub fn drag(viewport: &mut Viewport, movement_x: f64) {
        viewport.set_pan(viewport.pan + movement_x);
    }

    /// Directional shortcuts: up/down zoom, left/right pan.
    pub fn key(viewport: &mut Viewport, key: ArrowKey) {
        match key {
            ArrowKey::Up => viewport.adjust_zoom(KEY_ZOOM_STEP),
            ArrowKey::Down => viewport.adjust_zoom(-KEY_ZOOM_STEP),
            ArrowKey::Left => viewport.set_pan(viewport.pan + KEY_PAN_STEP),
            ArrowKey::Right => viewport.set_pan(viewport.pan - KEY_PAN_STEP),
        }
    }
}
