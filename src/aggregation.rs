use crate::data_types::{FieldRange, FieldSelection, LogRecord};
use rayon::prelude::*;

/// Memoized min/max scan over the full record buffer.
///
/// The scan is O(records × selected fields) and is the only expensive
/// computation in a frame, so results are cached against the buffer and
/// selection revisions and recomputed only when one of them changes. There is
/// a single thread of control, so the memo key alone gives single-flight.
#[derive(Debug, Default)]
pub struct FieldAggregator {
    memo_key: Option<(u64, u64)>,
    ranges: Vec<FieldRange>,
}

impl FieldAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ranges for `selection` over `records`, in selection order (the order
    /// drives color assignment downstream).
    pub fn ranges(
        &mut self,
        records: &[LogRecord],
        buffer_revision: u64,
        selection: &[FieldSelection],
        selection_revision: u64,
    ) -> &[FieldRange] {
        let key = (buffer_revision, selection_revision);
        if self.memo_key != Some(key) {
            self.ranges = scan(records, selection);
            self.memo_key = Some(key);
        }
        &self.ranges
    }

    pub fn invalidate(&mut self) {
        self.memo_key = None;
    }
}

/// One linear pass per field, fields fanned out in parallel.
///
/// Bounds are seeded at 0 and only widen toward observed extremes. Missing
/// fields, tags and NaN samples never move a bound.
fn scan(records: &[LogRecord], selection: &[FieldSelection]) -> Vec<FieldRange> {
    selection
        .par_iter()
        .map(|field| {
            let mut min = 0.0f64;
            let mut max = 0.0f64;
            for record in records {
                let Some(value) = record.number(&field.name) else {
                    continue;
                };
                if value > max {
                    max = value;
                }
                if value < min {
                    min = value;
                }
            }
            FieldRange {
                name: field.name.clone(),
                min,
                max,
                scale: field.scale.resolve_or(1.0),
                transform: field.transform.resolve_or(0.0),
                units: field.units.clone(),
                format: field.format.clone(),
            }
        })
        .collect()
}
