use crate::data_types::{ChartArea, FieldRange};
use crate::numeric::{color_hsl, remap, round_to};
use crate::rendering::{Color, HslColor, Polyline};
use crate::window::Window;

/// Horizontal scale in drawing-area pixels per window index.
pub fn index_scale(area_width: f64, window_len: usize, effective_zoom: f64) -> f64 {
    if window_len == 0 {
        return 0.0;
    }
    area_width / (window_len as f64 / effective_zoom)
}

/// Projects every selected field of the window to one polyline each, colored
/// by evenly spaced hues in selection order.
pub fn project(
    window: &Window,
    ranges: &[FieldRange],
    area: &ChartArea,
    effective_zoom: f64,
) -> Vec<Polyline> {
    let scale = index_scale(area.width, window.len(), effective_zoom);
    let last = ranges.len().saturating_sub(1);
    ranges
        .iter()
        .enumerate()
        .map(|(field_index, range)| {
            let color = Color::Hsl(HslColor::from_hue(color_hsl(0, last, field_index)));
            project_field(window, range, area, scale, color)
        })
        .collect()
}

/// One field's visible samples as a pixel polyline.
///
/// Markers and records without a finite numeric sample for the field are
/// skipped without breaking the line: the next contributing sample continues
/// from the previous vertex. An empty window yields an empty polyline.
pub fn project_field(
    window: &Window,
    range: &FieldRange,
    area: &ChartArea,
    index_scale: f64,
    color: Color,
) -> Polyline {
    let plot_height = area.plot_height();
    let mut points = Vec::with_capacity(window.len());
    for (index, record) in window.iter().enumerate() {
        if record.is_marker() {
            continue;
        }
        let Some(value) = record.number(&range.name) else {
            continue;
        };
        let y = plot_height - remap(value, range.min, range.max, 0.0, plot_height);
        if !y.is_finite() {
            continue;
        }
        let x = round_to(index as f64 * index_scale, 0);
        points.push((x, round_to(y, 0)));
    }
    Polyline {
        field: range.name.clone(),
        color,
        points,
    }
}
