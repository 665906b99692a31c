// Spline evaluation against realistic tide segments

use tide_glance::graph::{read_graph, Viewport};
use tide_glance::parse::parse_spline;
use tide_glance::{CubicSegment, GraphConfig, Spline};

/// Cubic with zero slope at both ends joining (t1, h1) to (t2, h2)
fn tide_segment(t1: i64, h1: f64, t2: i64, h2: f64) -> CubicSegment {
    let span = (t2 - t1) as f64;
    let rise = h2 - h1;
    CubicSegment {
        start: t1,
        end: t2,
        a: -2.0 * rise / span.powi(3),
        b: 3.0 * rise / span.powi(2),
        c: 0.0,
        d: h1,
    }
}

/// Alternating highs and lows roughly six hours apart
fn week_of_tides() -> Spline {
    let base = 1_700_000_000;
    let extremes: Vec<(i64, f64)> = (0..28)
        .map(|i| {
            let t = base + i * 22_357;
            let h = if i % 2 == 0 { 5.1 - 0.05 * i as f64 } else { -0.4 + 0.03 * i as f64 };
            (t, h)
        })
        .collect();
    Spline::new(
        extremes
            .windows(2)
            .map(|w| tide_segment(w[0].0, w[0].1, w[1].0, w[1].1))
            .collect(),
    )
}

#[test]
fn test_end_to_end_half_day_steps() {
    let spline = parse_spline(
        r#"[{"start":0,"end":43200,"a":0,"b":0,"c":0,"d":1},
            {"start":43200,"end":86400,"a":0,"b":0,"c":0,"d":3}]"#,
    )
    .expect("payload should parse");

    assert_eq!(spline.evaluate(43199.0), 1.0);
    assert_eq!(spline.evaluate(43201.0), 3.0);
}

#[test]
fn test_every_segment_is_found() {
    let spline = week_of_tides();
    assert!(spline.len() >= 8);

    for segment in spline.segments() {
        for offset in [1.0, 1234.5, (segment.end - segment.start) as f64 - 1.0] {
            let t = segment.start as f64 + offset;
            assert_eq!(
                spline.evaluate(t),
                segment.eval(t),
                "segment starting at {} offset {}",
                segment.start,
                offset
            );
        }
    }
}

#[test]
fn test_heights_hit_extremes_and_stay_continuous() {
    let spline = week_of_tides();
    let segments = spline.segments();

    for pair in segments.windows(2) {
        let boundary = pair[1].start as f64;
        let before = pair[0].polynomial(boundary);
        let after = spline.evaluate(boundary);
        assert!((before - after).abs() < 1e-9, "jump at {}: {} vs {}", boundary, before, after);
        assert!((after - pair[1].d).abs() < 1e-12);
    }
}

#[test]
fn test_outside_domain_is_nan() {
    let spline = week_of_tides();
    let (start, end) = spline.time_range().unwrap();
    assert!(spline.evaluate(start as f64 - 1.0).is_nan());
    assert!(spline.evaluate(end as f64 + 1.0).is_nan());
    assert!(!spline.evaluate(end as f64).is_nan());
}

#[test]
fn test_sample_matches_evaluate() {
    let spline = week_of_tides();
    let samples = spline.sample(50);
    assert_eq!(samples.len(), 50);
    assert!(samples.iter().all(|h| h.is_finite()));
    let (start, _) = spline.time_range().unwrap();
    assert_eq!(samples[0], spline.evaluate(start as f64));
}

#[test]
fn test_reading_a_graph_day() {
    let spline = week_of_tides();
    let (start, _) = spline.time_range().unwrap();
    let viewport = Viewport::new(1000.0, 400.0);
    let config = GraphConfig::default();

    let reading = read_graph(
        &spline,
        start,
        &viewport,
        0.0,
        &config,
        |_| Some("6:13 AM".to_string()),
        || f64::NAN,
    );

    assert_eq!(reading.time, start as f64);
    assert!((reading.height - 5.1).abs() < 1e-12);
    assert_eq!(reading.tooltip.as_deref(), Some("tide is 5.1 ft at 6:13 AM"));
    // No rendered curve: the marker falls back to the analytic formula
    let expected_y = viewport.height_to_y(reading.height, &config.height_scale);
    assert_eq!(reading.marker(), Some((0.0, expected_y)));
    assert!((expected_y - 116.0).abs() <= 1.0);
}
