//! Scalar helpers shared by the windowing, projection and readout passes.

/// Affine map of `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// A degenerate input range (`in_min == in_max`) maps to `out_min` instead of
/// dividing by zero, so a field with a single observed value still projects to
/// a finite coordinate.
pub fn remap(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if in_min == in_max {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Rounds `value` to `precision` decimal digits.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Hue in `[0, 360)` for `index` within `[min, max]`, evenly spaced so that
/// N plotted fields get N visually distinct colors.
///
/// The distribution uses `max - min + 1` slots: with the endpoints mapped
/// straight onto `[0, 360]` the last hue would wrap onto the first. A
/// single-slot range returns hue 0.
pub fn color_hsl(min: usize, max: usize, index: usize) -> f64 {
    if max <= min {
        return 0.0;
    }
    let slots = (max - min + 1) as f64;
    (index.saturating_sub(min) as f64 * 360.0 / slots) % 360.0
}

/// Renders `value` per a printf-subset display format: `"%d"` rounds to an
/// integer, `"%.Nf"` prints N fixed decimals, anything else falls back to the
/// plain `Display` form.
pub fn format_number(value: f64, format: &str) -> String {
    if format == "%d" {
        return format!("{}", round_to(value, 0) as i64);
    }
    if let Some(decimals) = fixed_decimals(format) {
        return format!("{value:.decimals$}");
    }
    format!("{value}")
}

fn fixed_decimals(format: &str) -> Option<usize> {
    format.strip_prefix("%.")?.strip_suffix('f')?.parse().ok()
}
