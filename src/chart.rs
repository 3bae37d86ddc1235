//! Chart engine facade.
//!
//! Owns the viewport and input state, borrows the record buffer per frame,
//! and turns both into draw instructions. Painting, event delivery and log
//! ingestion stay on the host side.

use crate::aggregation::FieldAggregator;
use crate::cursor;
use crate::data_types::{ChartArea, FieldRange, FieldSelection, RecordBuffer};
use crate::decimation::DecimationConfig;
use crate::input::{InputEvent, InputHandler};
use crate::projector;
use crate::rendering::Frame;
use crate::theme::{self, ChartTheme};
use crate::viewport::Viewport;
use crate::window::Window;
use eyre::{bail, Result};
use std::collections::HashSet;

pub struct Chart {
    viewport: Viewport,
    input: InputHandler,
    selection: Vec<FieldSelection>,
    selection_revision: u64,
    aggregator: FieldAggregator,
    decimation: DecimationConfig,
    theme: ChartTheme,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            viewport: Viewport::new(),
            input: InputHandler::new(),
            selection: Vec::new(),
            selection_revision: 0,
            aggregator: FieldAggregator::new(),
            decimation: DecimationConfig::default(),
            theme: ChartTheme::default(),
        }
    }

    pub fn with_selection(fields: Vec<FieldSelection>) -> Result<Self> {
        let mut chart = Self::new();
        chart.set_selection(fields)?;
        Ok(chart)
    }

    /// Replaces the plotted field list. Names must be non-blank and unique.
    pub fn set_selection(&mut self, fields: Vec<FieldSelection>) -> Result<()> {
        let mut seen = HashSet::new();
        for field in &fields {
            if field.name.trim().is_empty() {
                bail!("field selection with a blank name");
            }
            if !seen.insert(field.name.as_str()) {
                bail!("duplicate field selection: {}", field.name);
            }
        }
        self.selection = fields;
        self.selection_revision += 1;
        Ok(())
    }

    pub fn selection(&self) -> &[FieldSelection] {
        &self.selection
    }

    pub fn set_decimation(&mut self, config: DecimationConfig) {
        self.decimation = config;
    }

    pub fn set_theme(&mut self, theme: ChartTheme) {
        self.theme = theme;
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Applies one host input event to the viewport and cursor state.
    pub fn handle_event(&mut self, event: &InputEvent) {
        self.input.handle(&mut self.viewport, event);
    }

    /// Produces the draw instructions for one frame.
    ///
    /// A viewport that drifted out of range is snapped back and the frame
    /// comes back blank with `skipped` set; the engine always returns a
    /// valid frame, never an error. An empty buffer renders a blank frame.
    pub fn render(&mut self, data: &RecordBuffer, area: ChartArea) -> Frame {
        let mut frame = Frame {
            stroke_width: theme::stroke_width(area.plot_height()),
            ..Frame::default()
        };
        let settled = self.viewport.settle(area.width);
        frame.zoom = self.viewport.zoom;
        frame.pan = self.viewport.pan;
        if !settled {
            frame.skipped = true;
            return frame;
        }
        if data.is_empty() {
            return frame;
        }

        let ranges: &[FieldRange] = if self.selection.is_empty() {
            &[]
        } else {
            self.aggregator.ranges(
                data.records(),
                data.revision(),
                &self.selection,
                self.selection_revision,
            )
        };
        let window = Window::compute(data.records(), &self.viewport, area.width, &self.decimation);

        frame.polylines = projector::project(&window, ranges, &area, self.viewport.effective_zoom());
        if let Some(readout) =
            cursor::resolve(&window, ranges, &area, self.input.indicator_pos(), &self.theme)
        {
            frame.labels = readout.labels;
            frame.guide = Some(readout.guide);
        }
        frame
    }
}
