//! Sampling the rendered tide curve at a screen x-coordinate
//!
//! Each tide segment is drawn as a closed shape: the cubic curve on top,
//! then straight edges down the right side, along the bottom of the
//! viewport and back up the left side. The curve's own arc length is the
//! path's total length minus those three edges.
//!
//! The parameter `t` found by root-finding is scaled onto that arc length
//! and the rendered path is asked for the point at the resulting offset.

use crate::models::{AlignmentLine, BezierCurve, ControlPoint};

use super::roots::first_root;

/// A rendered path that can be sampled by arc length
///
/// Implemented for `web_sys::SvgPathElement` in the browser.
pub trait RenderedPath {
    /// Total length of the path, all subpaths and edges included
    fn total_length(&self) -> f64;

    /// Point at `offset` along the path, or `None` if the host refused
    fn point_at_length(&self, offset: f64) -> Option<ControlPoint>;
}

/// A Bézier curve paired with the rendered path it was read from
#[derive(Debug, Clone)]
pub struct TaggedCurve<P> {
    pub curve: BezierCurve,
    pub path: P,
}

impl<P> TaggedCurve<P> {
    pub fn new(curve: BezierCurve, path: P) -> Self {
        Self { curve, path }
    }
}

impl<P: RenderedPath> TaggedCurve<P> {
    /// Arc length of the curve alone
    ///
    /// `viewport_height` is the y of the bottom edge the shape is closed on.
    pub fn curve_length(&self, viewport_height: f64) -> f64 {
        let start = self.curve.start();
        let end = self.curve.end();
        let left_edge = viewport_height - start.y;
        let right_edge = viewport_height - end.y;
        let bottom_edge = end.x - start.x;
        self.path.total_length() - left_edge - right_edge - bottom_edge
    }

    /// Pixel y of the rendered curve at `x`, or NaN when no root is found
    pub fn y_at(&self, x: f64, viewport_height: f64) -> f64 {
        let adjusted = self.curve.x_intersection_points(x);
        let Some(t) = first_root(&adjusted, &AlignmentLine::default()) else {
            log::trace!("no root for x={} in curve {:?}", x, self.curve.points);
            return f64::NAN;
        };

        let offset = t * self.curve_length(viewport_height);
        self.path
            .point_at_length(offset)
            .map_or(f64::NAN, |point| point.y)
    }
}

/// Pixel y of the rendered tide at `query_x`
///
/// Uses the first curve whose x-range contains `query_x`. Returns NaN when
/// `query_x` is outside every curve or no root can be found.
pub fn height_at_x<P: RenderedPath>(
    curves: &[TaggedCurve<P>],
    query_x: f64,
    viewport_height: f64,
) -> f64 {
    curves
        .iter()
        .find(|tagged| tagged.curve.contains_x(query_x))
        .map_or(f64::NAN, |tagged| tagged.y_at(query_x, viewport_height))
}
