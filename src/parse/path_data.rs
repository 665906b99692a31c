//! Control points from SVG path data
//!
//! Tide paths are drawn as `M x0,y0 C x1,y1 x2,y2 x3,y3 L ... z`; the first
//! eight numbers in the `d` attribute are the cubic's control points.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{GraphError, Result};
use crate::models::BezierCurve;

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("number pattern is valid"));

/// Every numeric token in `d`, in order
pub fn numeric_tokens(d: &str) -> Vec<f64> {
    NUMBER
        .find_iter(d)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// The cubic curve described by the first eight numbers of `d`
pub fn control_points(d: &str) -> Result<BezierCurve> {
    let tokens = numeric_tokens(d);
    BezierCurve::from_flat(&tokens).ok_or(GraphError::InvalidPathData { found: tokens.len() })
}
