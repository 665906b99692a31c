//! Points and alignment lines in SVG user space
//!
//! Control points come straight out of a rendered path's `d` attribute, so
//! they live in the same coordinate system as the pointer once it has been
//! mapped through the SVG's screen transform.

use serde::{Deserialize, Serialize};

/// A point in on-screen SVG coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlPoint {
    pub x: f64,
    pub y: f64,
}

impl ControlPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &ControlPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Linear interpolation toward `other` by fraction `t`
    pub fn lerp(&self, other: &ControlPoint, t: f64) -> ControlPoint {
        ControlPoint {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl From<(f64, f64)> for ControlPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Reference line for root extraction
///
/// Points are translated by `-p1` and rotated by `-angle(p2 - p1)` so the
/// line lands on the x-axis; a root is then wherever the aligned curve's
/// y-component crosses zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentLine {
    pub p1: ControlPoint,
    pub p2: ControlPoint,
}

impl AlignmentLine {
    pub const fn new(p1: ControlPoint, p2: ControlPoint) -> Self {
        Self { p1, p2 }
    }

    /// Angle of the line relative to the positive x-axis, in radians
    pub fn angle(&self) -> f64 {
        (self.p2.y - self.p1.y).atan2(self.p2.x - self.p1.x)
    }
}

impl Default for AlignmentLine {
    /// The unit segment (0,0)-(1,0): alignment is the identity transform
    fn default() -> Self {
        Self {
            p1: ControlPoint::new(0.0, 0.0),
            p2: ControlPoint::new(1.0, 0.0),
        }
    }
}
