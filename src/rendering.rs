//! Draw instructions handed to the paint collaborator.

/// Stroke/fill color, either a trace hue or a fixed palette entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Hsl(HslColor),
    Rgb(u8, u8, u8),
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HslColor {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl HslColor {
    /// Trace color: near-full saturation at mid lightness, hue per field.
    pub fn from_hue(hue: f64) -> Self {
        Self {
            hue,
            saturation: 90.0,
            lightness: 50.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
}

/// A positioned readout label. The paint collaborator draws a shadow pass
/// first, offset by the theme's shadow offset in the background color.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: Color,
    pub align: TextAlign,
}

/// One polyline per plotted field, in drawing-area pixel space. Consecutive
/// points are joined by line segments; the first point is the move-to.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub field: String,
    pub color: Color,
    pub points: Vec<(f64, f64)>,
}

/// Dashed vertical cursor guide spanning the full canvas height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GuideLine {
    pub x: f64,
    pub height: f64,
}

/// Everything the paint collaborator needs for one frame.
///
/// Ephemeral: consumed within the frame that produced it, never persisted.
/// `zoom`/`pan` are the settled viewport values for external state display.
/// `skipped` is set when the viewport was out of range at render entry; the
/// frame then carries no drawing but is still a valid (blank) render.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub polylines: Vec<Polyline>,
    pub labels: Vec<TextLabel>,
    pub guide: Option<GuideLine>,
    pub stroke_width: f64,
    pub zoom: f64,
    pub pan: f64,
    pub skipped: bool,
}
