use crate::data_types::LogRecord;
use serde::{Deserialize, Serialize};

/// Stride decimation policy for very large windows.
///
/// `Disabled` pins the stride to 1 and plots every windowed record.
/// `Adaptive` keeps every Nth record once the window packs more than one
/// record per horizontal pixel, bounding per-frame draw cost; the stride is
/// capped at `max_resolution`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecimationConfig {
    #[default]
    Disabled,
    Adaptive {
        max_resolution: usize,
    },
}

impl DecimationConfig {
    /// Stride for a window that packs `records_per_pixel` records into one
    /// horizontal pixel.
    pub fn resolution(&self, records_per_pixel: f64) -> usize {
        match *self {
            Self::Disabled => 1,
            Self::Adaptive { max_resolution } => {
                if records_per_pixel < 1.0 {
                    1
                } else {
                    (records_per_pixel as usize).clamp(1, max_resolution.max(1))
                }
            }
        }
    }
}

/// Keeps every `resolution`-th record, counted from the window start.
pub fn decimate_stride(records: &[LogRecord], resolution: usize) -> Vec<&LogRecord> {
    records
        .iter()
        .enumerate()
        .filter(|(index, _)| index % resolution == 0)
        .map(|(_, record)| record)
        .collect()
}
