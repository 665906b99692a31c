// Root-finding and rendered-curve sampling on tide-shaped paths

use tide_glance::math::{first_root, height_at_x, roots, RenderedPath, TaggedCurve};
use tide_glance::parse::control_points;
use tide_glance::{AlignmentLine, BezierCurve, ControlPoint};

const VIEW_HEIGHT: f64 = 400.0;

/// Flattened stand-in for an SVG path: the curve, then the closing edges
struct FlattenedPath(Vec<ControlPoint>);

impl FlattenedPath {
    fn for_curve(curve: &BezierCurve) -> Self {
        let steps = 2000;
        let mut points: Vec<ControlPoint> =
            (0..=steps).map(|i| curve.point_at(i as f64 / steps as f64)).collect();
        points.push(ControlPoint::new(curve.end().x, VIEW_HEIGHT));
        points.push(ControlPoint::new(curve.start().x, VIEW_HEIGHT));
        points.push(curve.start());
        Self(points)
    }
}

impl RenderedPath for FlattenedPath {
    fn total_length(&self) -> f64 {
        self.0.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
    }

    fn point_at_length(&self, offset: f64) -> Option<ControlPoint> {
        let mut remaining = offset.max(0.0);
        for w in self.0.windows(2) {
            let len = w[0].distance_to(&w[1]);
            if len > 0.0 && remaining <= len {
                return Some(w[0].lerp(&w[1], remaining / len));
            }
            remaining -= len;
        }
        self.0.last().copied()
    }
}

/// Tide paths as the server draws them: control x at the midpoint
fn tide_paths() -> Vec<BezierCurve> {
    [
        "M 0,340 C 70,340 70,95 140,95 L 140,400 L 0,400 z",
        "M 139,95 C 205,95 205,300 271,300 L 271,400 L 139,400 z",
        "M 270,300 C 340,300 340,60 410,60 L 410,400 L 270,400 z",
    ]
    .iter()
    .map(|d| control_points(d).expect("tide path should parse"))
    .collect()
}

#[test]
fn test_round_trip_through_control_point_x() {
    for curve in tide_paths() {
        for point in curve.points {
            let adjusted = curve.x_intersection_points(point.x);
            let t = first_root(&adjusted, &AlignmentLine::default())
                .unwrap_or_else(|| panic!("no root for x={} on {:?}", point.x, curve));
            let x = curve.point_at(t).x;
            assert!((x - point.x).abs() < 1e-6, "x={} came back as {}", point.x, x);
        }
    }
}

#[test]
fn test_every_interior_x_has_a_root() {
    for curve in tide_paths() {
        let (x0, x3) = (curve.start().x, curve.end().x);
        let mut x = x0;
        while x <= x3 {
            let found = roots(&curve.x_intersection_points(x), &AlignmentLine::default());
            assert!(!found.is_empty(), "no root at x={}", x);
            assert!(found.iter().all(|t| (0.0..=1.0).contains(t)));
            x += 0.5;
        }
    }
}

#[test]
fn test_sampled_y_lies_on_curve() {
    let curves: Vec<_> = tide_paths()
        .into_iter()
        .map(|curve| TaggedCurve::new(curve, FlattenedPath::for_curve(&curve)))
        .collect();

    for x in [10.0, 70.0, 120.0, 200.0, 300.0, 405.0] {
        let y = height_at_x(&curves, x, VIEW_HEIGHT);
        assert!(y.is_finite(), "x={} gave {}", x, y);
        // Arc length is not uniform in t, so only the band is checked
        assert!((60.0..=340.0).contains(&y), "x={} gave y={}", x, y);
    }

    // Symmetric curves: the midpoint in t is the midpoint in arc length
    let y = height_at_x(&curves, 70.0, VIEW_HEIGHT);
    assert!((y - (340.0 + 95.0) / 2.0).abs() < 0.5, "midpoint y={}", y);
}

#[test]
fn test_outside_all_curves_is_nan() {
    let curves: Vec<_> = tide_paths()
        .into_iter()
        .map(|curve| TaggedCurve::new(curve, FlattenedPath::for_curve(&curve)))
        .collect();

    assert!(height_at_x(&curves, -0.5, VIEW_HEIGHT).is_nan());
    assert!(height_at_x(&curves, 410.5, VIEW_HEIGHT).is_nan());
}

#[test]
fn test_first_matching_curve_wins_on_overlap() {
    let curves: Vec<_> = tide_paths()
        .into_iter()
        .map(|curve| TaggedCurve::new(curve, FlattenedPath::for_curve(&curve)))
        .collect();

    // x = 139.5 is covered by both the first and second paths
    let y = height_at_x(&curves, 139.5, VIEW_HEIGHT);
    let first_only = height_at_x(&curves[..1], 139.5, VIEW_HEIGHT);
    let second_only = height_at_x(&curves[1..], 139.5, VIEW_HEIGHT);
    assert_eq!(y, first_only);
    assert!(second_only.is_finite());
    assert!((y - 95.0).abs() < 5.0, "y={}", y);
}
