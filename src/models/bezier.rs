//! Cubic Bézier curves taken from rendered tide paths

use serde::{Deserialize, Serialize};

use super::point::ControlPoint;

/// A cubic Bézier curve: exactly four control points, start to end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierCurve {
    pub points: [ControlPoint; 4],
}

impl BezierCurve {
    pub const fn new(points: [ControlPoint; 4]) -> Self {
        Self { points }
    }

    /// Build a curve from a flat `[x0, y0, x1, y1, ...]` list
    ///
    /// Only the first eight values are used. Returns `None` when fewer are
    /// available.
    pub fn from_flat(values: &[f64]) -> Option<Self> {
        if values.len() < 8 {
            return None;
        }
        let mut points = [ControlPoint::default(); 4];
        for (i, point) in points.iter_mut().enumerate() {
            *point = ControlPoint::new(values[2 * i], values[2 * i + 1]);
        }
        Some(Self { points })
    }

    pub fn start(&self) -> ControlPoint {
        self.points[0]
    }

    pub fn end(&self) -> ControlPoint {
        self.points[3]
    }

    /// Whether `x` lies within `[start.x, end.x]`
    pub fn contains_x(&self, x: f64) -> bool {
        self.start().x <= x && x <= self.end().x
    }

    /// Evaluate the curve at parameter `t` using the Bernstein basis
    pub fn point_at(&self, t: f64) -> ControlPoint {
        let mt = 1.0 - t;
        let [b0, b1, b2, b3] = [mt * mt * mt, 3.0 * mt * mt * t, 3.0 * mt * t * t, t * t * t];
        let [p0, p1, p2, p3] = self.points;
        ControlPoint {
            x: b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
            y: b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
        }
    }

    /// Re-express the control points so that roots locate `x == target_x`
    ///
    /// Each point becomes `(i/3, x_i - target_x)`; the curve's y-component
    /// is then zero exactly where the original curve's x equals `target_x`.
    pub fn x_intersection_points(&self, target_x: f64) -> [ControlPoint; 4] {
        let mut adjusted = [ControlPoint::default(); 4];
        for (i, (out, p)) in adjusted.iter_mut().zip(self.points.iter()).enumerate() {
            *out = ControlPoint::new(i as f64 / 3.0, p.x - target_x);
        }
        adjusted
    }
}
