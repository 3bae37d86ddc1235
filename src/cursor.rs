use crate::data_types::{ChartArea, FieldRange, LogRecord};
use crate::numeric::{color_hsl, format_number, remap, round_to};
use crate::rendering::{Color, GuideLine, HslColor, TextAlign, TextLabel};
use crate::theme::ChartTheme;
use crate::window::Window;
use tracing::info;

/// Horizontal gap between the guide line and the readout text.
const LABEL_MARGIN: f64 = 10.0;
/// Vertical advance per readout line.
const LABEL_LINE_HEIGHT: f64 = 20.0;

/// Live readout for the record nearest the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorReadout {
    pub guide: GuideLine,
    pub labels: Vec<TextLabel>,
}

/// Maps the pointer x-position back to the nearest windowed record and
/// formats the per-field readout.
///
/// An index past the window logs an informational note and yields no readout
/// (never fatal). A marker at the resolved index is substituted by the
/// nearest preceding field record so the readout always shows a continuous
/// sample.
pub fn resolve(
    window: &Window,
    ranges: &[FieldRange],
    area: &ChartArea,
    indicator_pos: f64,
    theme: &ChartTheme,
) -> Option<CursorReadout> {
    let index = if indicator_pos < 0.0 {
        0
    } else {
        remap(
            indicator_pos,
            0.0,
            area.width,
            0.0,
            window.len() as f64 - 1.0,
        )
        .round()
        .max(0.0) as usize
    };

    let Some(record) = window.get(index) else {
        info!(index, "cursor index out of bounds");
        return None;
    };
    let Some(record) = substitute_marker(window, index, record) else {
        info!(index, "no field record precedes marker");
        return None;
    };

    // Flip the readout to the other side of the guide past the midpoint so
    // it never runs off-canvas.
    let (left, align) = if indicator_pos > area.width / 2.0 {
        (indicator_pos - LABEL_MARGIN, TextAlign::Right)
    } else {
        (indicator_pos + LABEL_MARGIN, TextAlign::Left)
    };

    let last = ranges.len().saturating_sub(1);
    let mut labels = Vec::with_capacity(ranges.len() + 1);
    let mut top = 0.0;
    for (field_index, range) in ranges.iter().enumerate() {
        let Some(raw) = record.number(&range.name) else {
            continue;
        };
        let value = format_number(range.display_value(raw), &range.format);
        let text = if range.units.is_empty() {
            format!("{}: {}", range.name, value)
        } else {
            format!("{}: {} ({})", range.name, value, range.units)
        };
        top += LABEL_LINE_HEIGHT;
        labels.push(TextLabel {
            text,
            x: left,
            y: top,
            color: Color::Hsl(HslColor::from_hue(color_hsl(0, last, field_index))),
            align,
        });
    }

    labels.push(TextLabel {
        text: format!("{}s", round_to(record.time, 3)),
        x: left,
        y: area.plot_height() + LABEL_LINE_HEIGHT,
        color: theme.time_label,
        align,
    });

    Some(CursorReadout {
        guide: GuideLine {
            x: indicator_pos,
            height: area.height,
        },
        labels,
    })
}

/// Walks left past consecutive markers to the nearest field record.
fn substitute_marker<'a>(
    window: &Window<'a>,
    index: usize,
    record: &'a LogRecord,
) -> Option<&'a LogRecord> {
    let mut record = record;
    let mut i = index;
    while record.is_marker() {
        if i == 0 {
            return None;
        }
        i -= 1;
        record = window.get(i)?;
    }
    Some(record)
}
