//! Viewport transform and windowing engine for interactive log charts.
//!
//! Maps an unbounded buffer of timestamped records plus a continuous
//! zoom/pan state into per-field pixel polylines and a pointer-to-record
//! cursor readout. The paint backend, host event delivery and log ingestion
//! are external collaborators: the engine consumes a [`RecordBuffer`] and a
//! field selection and produces a [`Frame`] of draw instructions per render
//! pass.

pub mod aggregation;
pub mod chart;
pub mod cursor;
pub mod data_types;
pub mod decimation;
pub mod input;
pub mod numeric;
pub mod projector;
pub mod rendering;
pub mod theme;
pub mod view_controller;
pub mod viewport;
pub mod window;

pub use chart::Chart;
pub use data_types::{
    ChartArea, Coefficient, FieldRange, FieldSelection, LogRecord, RecordBuffer, RecordKind, Value,
};
pub use decimation::DecimationConfig;
pub use input::{ArrowKey, InputEvent};
pub use rendering::{Color, Frame, GuideLine, HslColor, Polyline, TextAlign, TextLabel};
pub use theme::ChartTheme;
pub use view_controller::ViewController;
pub use viewport::Viewport;
pub use window::Window;
