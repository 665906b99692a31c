//! Numeric core exposed to JavaScript
//!
//! For pages that wire their own DOM handling but want the spline model and
//! root solver. Spline payloads are passed as the JSON text embedded in the
//! graph.

use wasm_bindgen::prelude::*;

use crate::config::HeightScale;
use crate::graph::Viewport;
use crate::math;
use crate::models::{AlignmentLine, ControlPoint};
use crate::parse::{control_points, parse_spline};

use super::helpers::{deserialize, deserialize_optional, js_error, serialize, validate_point_count};

/// Tide height at absolute time `t`, NaN outside the spline
#[wasm_bindgen(js_name = evaluateSpline)]
pub fn evaluate_spline(spline_json: &str, t: f64) -> Result<f64, JsValue> {
    let spline = parse_spline(spline_json).map_err(|e| js_error(e.to_string()))?;
    Ok(spline.evaluate(t))
}

/// `n` evenly spaced heights over the spline's whole time range
#[wasm_bindgen(js_name = sampleSpline)]
pub fn sample_spline(spline_json: &str, n: usize) -> Result<Vec<f64>, JsValue> {
    let spline = parse_spline(spline_json).map_err(|e| js_error(e.to_string()))?;
    Ok(spline.sample(n))
}

/// Roots in `[0, 1]` of a quadratic or cubic Bézier against `line`
///
/// # Parameters
/// - `points`: array of 3 or 4 `{x, y}` objects
/// - `line`: optional `{p1, p2}`; defaults to the x-axis
#[wasm_bindgen(js_name = bezierRoots)]
pub fn bezier_roots(points: JsValue, line: JsValue) -> Result<Vec<f64>, JsValue> {
    let points: Vec<ControlPoint> = deserialize(points, "Failed to deserialize control points")?;
    validate_point_count(points.len()).map_err(js_error)?;
    let line: AlignmentLine =
        deserialize_optional(line, "Failed to deserialize alignment line")?.unwrap_or_default();

    Ok(math::roots(&points, &line))
}

/// Control points of the cubic in an SVG path's `d` attribute
#[wasm_bindgen(js_name = pathControlPoints)]
pub fn path_control_points(d: &str) -> Result<JsValue, JsValue> {
    let curve = control_points(d).map_err(|e| js_error(e.to_string()))?;
    serialize(&curve.points, "Failed to serialize control points")
}

/// Absolute time at pixel `x` of a graph `width` units wide spanning one day
#[wasm_bindgen(js_name = xToTime)]
pub fn x_to_time(reference: f64, x: f64, width: f64) -> f64 {
    let viewport = Viewport::new(width, 0.0);
    viewport.x_to_time(0, x, 24.0 * 60.0 * 60.0) + reference
}

/// Pixel y for a tide height on a graph `height` units tall
#[wasm_bindgen(js_name = heightToY)]
pub fn height_to_y(tide_height: f64, height: f64) -> f64 {
    Viewport::new(0.0, height).height_to_y(tide_height, &HeightScale::default())
}
