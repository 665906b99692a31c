//! Real roots of quadratic and cubic Bézier polynomials on `[0, 1]`
//!
//! Control points are first aligned so the reference line lies on the
//! x-axis; the roots are then the parameters where the aligned curve's
//! y-component is zero. Cubics whose leading coefficient vanishes fall back
//! to the quadratic, then linear, solution.
//!
//! Closed forms follow Pomax's *A Primer on Bézier Curves* (trigonometric
//! solution for three real roots, Cardano for one).

use std::f64::consts::TAU;

use crate::models::{AlignmentLine, ControlPoint};

/// Absolute tolerance for "approximately zero" comparisons
pub const EPSILON: f64 = 1e-6;

/// `|a - b| <= EPSILON`
pub fn approximately(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// Translate by `-line.p1` and rotate by `-angle(line)`
pub fn align(points: &[ControlPoint], line: &AlignmentLine) -> Vec<ControlPoint> {
    let (tx, ty) = (line.p1.x, line.p1.y);
    let (sin, cos) = (-line.angle()).sin_cos();

    points
        .iter()
        .map(|p| ControlPoint {
            x: (p.x - tx) * cos - (p.y - ty) * sin,
            y: (p.x - tx) * sin + (p.y - ty) * cos,
        })
        .collect()
}

/// Parameters in `[0, 1]` where the curve crosses `line`
///
/// Accepts 3 (quadratic) or 4 (cubic) control points; any other count yields
/// no roots. Candidates within [`EPSILON`] of the unit interval are clamped
/// onto it so that curve endpoints survive rounding. Order is unspecified.
pub fn roots(points: &[ControlPoint], line: &AlignmentLine) -> Vec<f64> {
    let aligned = align(points, line);

    let candidates = match aligned.as_slice() {
        [a, b, c] => quadratic(a.y, b.y, c.y),
        [a, b, c, d] => cubic(a.y, b.y, c.y, d.y),
        _ => {
            log::debug!("roots: unsupported control point count {}", points.len());
            Vec::new()
        }
    };

    candidates.into_iter().filter_map(within_unit).collect()
}

/// Smallest root in `[0, 1]`, if any
pub fn first_root(points: &[ControlPoint], line: &AlignmentLine) -> Option<f64> {
    roots(points, line).into_iter().reduce(f64::min)
}

fn within_unit(t: f64) -> Option<f64> {
    // NaN from a negative discriminant fails the range check
    if (-EPSILON..=1.0 + EPSILON).contains(&t) {
        Some(t.clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Quadratic Bernstein values `a, b, c`
fn quadratic(a: f64, b: f64, c: f64) -> Vec<f64> {
    let d = a - 2.0 * b + c;

    if d != 0.0 {
        let m1 = -(b * b - a * c).sqrt();
        let m2 = -a + b;
        vec![-(m1 + m2) / d, -(-m1 + m2) / d]
    } else if b != c {
        vec![(2.0 * b - c) / (2.0 * b - 2.0 * c)]
    } else {
        Vec::new()
    }
}

/// Cubic Bernstein values `pa, pb, pc, pd`
fn cubic(pa: f64, pb: f64, pc: f64, pd: f64) -> Vec<f64> {
    // Power basis: d·t³ + a·t² + b·t + c
    let d = -pa + 3.0 * pb - 3.0 * pc + pd;
    let a = 3.0 * pa - 6.0 * pb + 3.0 * pc;
    let b = -3.0 * pa + 3.0 * pb;
    let c = pa;

    if approximately(d, 0.0) {
        if approximately(a, 0.0) {
            if approximately(b, 0.0) {
                return Vec::new();
            }
            return vec![-c / b];
        }
        let q = (b * b - 4.0 * a * c).sqrt();
        let a2 = 2.0 * a;
        return vec![(q - b) / a2, (-b - q) / a2];
    }

    let (a, b, c) = (a / d, b / d, c / d);

    let p = (3.0 * b - a * a) / 3.0;
    let p3 = p / 3.0;
    let q = (2.0 * a * a * a - 9.0 * a * b + 27.0 * c) / 27.0;
    let q2 = q / 2.0;
    let discriminant = q2 * q2 + p3 * p3 * p3;
    let shift = a / 3.0;

    if discriminant < 0.0 {
        // Three distinct real roots
        let mp3 = -p / 3.0;
        let r = (mp3 * mp3 * mp3).sqrt();
        let cosphi = (-q / (2.0 * r)).clamp(-1.0, 1.0);
        let phi = cosphi.acos();
        let t1 = 2.0 * r.cbrt();
        vec![
            t1 * (phi / 3.0).cos() - shift,
            t1 * ((phi + TAU) / 3.0).cos() - shift,
            t1 * ((phi + 2.0 * TAU) / 3.0).cos() - shift,
        ]
    } else if discriminant == 0.0 {
        let u1 = if q2 < 0.0 { (-q2).cbrt() } else { -q2.cbrt() };
        vec![2.0 * u1 - shift, -u1 - shift]
    } else {
        let sd = discriminant.sqrt();
        let u1 = (-q2 + sd).cbrt();
        let v1 = (q2 + sd).cbrt();
        vec![u1 - v1 - shift]
    }
}
