use logchart::numeric::{color_hsl, format_number, remap, round_to};

#[test]
fn test_remap_endpoints() {
    assert_eq!(remap(0.0, 0.0, 25.0, 0.0, 100.0), 0.0);
    assert_eq!(remap(25.0, 0.0, 25.0, 0.0, 100.0), 100.0);
    assert_eq!(remap(10.0, 0.0, 25.0, 0.0, 100.0), 40.0);
}

#[test]
fn test_remap_monotonic() {
    let mut last = f64::NEG_INFINITY;
    for i in 0..=100 {
        let v = remap(i as f64, 0.0, 100.0, -50.0, 350.0);
        assert!(v >= last, "remap not monotonic at {i}: {v} < {last}");
        last = v;
    }
}

#[test]
fn test_remap_degenerate_range_returns_out_min() {
    // A single observed value must map to a fixed finite coordinate, not NaN.
    assert_eq!(remap(5.0, 3.0, 3.0, 0.0, 100.0), 0.0);
    assert_eq!(remap(3.0, 3.0, 3.0, 7.0, 9.0), 7.0);
}

#[test]
fn test_remap_inverted_output_range() {
    assert_eq!(remap(0.0, 0.0, 10.0, 100.0, 0.0), 100.0);
    assert_eq!(remap(10.0, 0.0, 10.0, 100.0, 0.0), 0.0);
}

#[test]
fn test_round_to() {
    assert_eq!(round_to(1.2345, 2), 1.23);
    assert_eq!(round_to(1.23456, 3), 1.235);
    assert_eq!(round_to(1.5, 0), 2.0);
    assert_eq!(round_to(123.456, 0), 123.0);
}

#[test]
fn test_color_hsl_even_spacing() {
    // Three fields get three distinct hues a third of the wheel apart.
    assert_eq!(color_hsl(0, 2, 0), 0.0);
    assert_eq!(color_hsl(0, 2, 1), 120.0);
    assert_eq!(color_hsl(0, 2, 2), 240.0);
}

#[test]
fn test_color_hsl_endpoints_do_not_collide() {
    let count = 5;
    let hues: Vec<f64> = (0..count).map(|i| color_hsl(0, count - 1, i)).collect();
    for (i, a) in hues.iter().enumerate() {
        assert!((0.0..360.0).contains(a));
        for b in &hues[i + 1..] {
            assert!((a - b).abs() > 1.0, "hues {a} and {b} collide");
        }
    }
}

#[test]
fn test_color_hsl_single_field() {
    assert_eq!(color_hsl(0, 0, 0), 0.0);
}

#[test]
fn test_format_number_integer() {
    assert_eq!(format_number(14.7, "%d"), "15");
    assert_eq!(format_number(-2.3, "%d"), "-2");
}

#[test]
fn test_format_number_fixed_decimals() {
    assert_eq!(format_number(14.756, "%.1f"), "14.8");
    assert_eq!(format_number(3.0, "%.2f"), "3.00");
}

#[test]
fn test_format_number_unknown_format_falls_back() {
    assert_eq!(format_number(1.5, ""), "1.5");
    assert_eq!(format_number(1.5, "hex"), "1.5");
}
