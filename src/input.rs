use crate::view_controller::ViewController;
use crate::viewport::Viewport;

/// Directional shortcuts; no other keys are intercepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

/// Raw input events as delivered by the host environment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Wheel {
        delta_x: f64,
        delta_y: f64,
    },
    PointerDown,
    PointerUp,
    /// `offset_x` is the pointer position within the drawing area,
    /// `movement_x` the frame-to-frame delta reported by the host.
    PointerMove {
        offset_x: f64,
        movement_x: f64,
    },
    TouchStart,
    /// Single-touch position in page coordinates.
    TouchMove {
        page_x: f64,
        page_y: f64,
    },
    Key(ArrowKey),
}

/// Per-gesture input state: button/touch tracking and the cursor position.
///
/// Constructed with the chart and dropped with it, so no listener state
/// outlives the engine.
#[derive(Debug, Default)]
pub struct InputHandler {
    pointer_down: bool,
    previous_touch: Option<(f64, f64)>,
    indicator_pos: f64,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer x-position driving the cursor readout.
    pub fn indicator_pos(&self) -> f64 {
        self.indicator_pos
    }

    pub fn handle(&mut self, viewport: &mut Viewport, event: &InputEvent) {
        match *event {
            InputEvent::Wheel { delta_x, delta_y } => {
                ViewController::wheel(viewport, delta_x, delta_y);
            }
            InputEvent::PointerDown => self.pointer_down = true,
            InputEvent::PointerUp => self.pointer_down = false,
            InputEvent::PointerMove {
                offset_x,
                movement_x,
            } => {
                self.indicator_pos = offset_x;
                if self.pointer_down {
                    ViewController::drag(viewport, movement_x);
                }
            }
            InputEvent::TouchStart => self.previous_touch = None,
            InputEvent::TouchMove { page_x, page_y } => {
                // The first move of a gesture only seeds the previous sample.
                if let Some((prev_x, _)) = self.previous_touch {
                    ViewController::drag(viewport, page_x - prev_x);
                }
                self.previous_touch = Some((page_x, page_y));
            }
            InputEvent::Key(key) => ViewController::key(viewport, key),
        }
    }
}
