use logchart::chart::Chart;
use logchart::data_types::{ChartArea, FieldSelection, LogRecord, RecordBuffer};
use logchart::input::InputEvent;

/// Markers interleaved with samples neither contribute vertices nor split the
/// trace, end to end through the engine.
#[test]
fn test_marker_records_keep_trace_continuous() {
    let mut chart = Chart::with_selection(vec![FieldSelection::new("temp")]).unwrap();
    let records = vec![
        LogRecord::field(0.0).with_value("temp", 0.0),
        LogRecord::field(0.1).with_value("temp", 10.0),
        LogRecord::marker(0.15),
        LogRecord::field(0.2).with_value("temp", 20.0),
        LogRecord::marker(0.25),
        LogRecord::field(0.3).with_value("temp", 30.0),
        LogRecord::field(0.4).with_value("temp", 40.0),
    ];
    let data = RecordBuffer::from_records(records);
    let frame = chart.render(&data, ChartArea::new(100.0, 130.0));

    assert_eq!(frame.polylines.len(), 1);
    let points = &frame.polylines[0].points;
    // Window holds 6 of the 7 records, 2 of them markers.
    assert_eq!(points.len(), 4);
    // Strictly increasing x: one unbroken polyline.
    for pair in points.windows(2) {
        assert!(pair[0].0 < pair[1].0);
    }
    // y decreases monotonically for a rising trace.
    for pair in points.windows(2) {
        assert!(pair[0].1 > pair[1].1);
    }
}

/// The worked scenario: five samples on a 100 px band, unit viewport.
#[test]
fn test_reference_scenario_temperature_trace() {
    let mut chart = Chart::with_selection(vec![FieldSelection::new("temp")]).unwrap();
    let records: Vec<LogRecord> = [10.0, 20.0, 15.0, 25.0, 5.0]
        .iter()
        .enumerate()
        .map(|(i, v)| LogRecord::field(i as f64).with_value("temp", *v))
        .collect();
    let data = RecordBuffer::from_records(records);
    // 130 px tall area: 100 px plot band over the 30 px footer.
    let frame = chart.render(&data, ChartArea::new(100.0, 130.0));

    let points = &frame.polylines[0].points;
    // Field range {min: 0, max: 25}: record 0 maps to 100 - 40 = 60,
    // record 3 to the top of the band.
    assert_eq!(points[0], (0.0, 60.0));
    assert_eq!(points[3], (75.0, 0.0));
}

/// Zoom, pan and cursor combined: the readout tracks the windowed record
/// under the pointer after the viewport moved.
#[test]
fn test_readout_follows_window_after_zoom_and_pan() {
    let mut chart = Chart::with_selection(vec![FieldSelection::new("n")]).unwrap();
    let records: Vec<LogRecord> = (0..101)
        .map(|i| LogRecord::field(i as f64 * 0.1).with_value("n", i as f64))
        .collect();
    let data = RecordBuffer::from_records(records);
    let area = ChartArea::new(100.0, 130.0);

    // Settle once at zoom 2, then pan 40 px left of origin.
    chart.handle_event(&InputEvent::Wheel {
        delta_x: 0.0,
        delta_y: -1000.0,
    });
    chart.render(&data, area);
    chart.handle_event(&InputEvent::Wheel {
        delta_x: 40.0,
        delta_y: 0.0,
    });
    chart.handle_event(&InputEvent::PointerMove {
        offset_x: 0.0,
        movement_x: 0.0,
    });
    let frame = chart.render(&data, area);

    assert!(!frame.skipped);
    // max_index = 100 / 2 = 50; pan -40 starts the window at index 20.
    assert!(frame
        .labels
        .iter()
        .any(|l| l.text.starts_with("n: 20")));
}
