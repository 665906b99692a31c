//! Tide graph WASM API
//!
//! JavaScript-facing entry points.
//!
//! # Module Structure
//!
//! - `helpers`: serialization and error conversion at the JS boundary
//! - `numeric`: spline evaluation, root-finding and pixel mapping

pub mod helpers;
pub mod numeric;

use wasm_bindgen::prelude::*;
use web_sys::SvgsvgElement;

use crate::config::GraphConfig;
use crate::dom;
use crate::math::height_at_x;

use helpers::{deserialize, js_error};

pub use numeric::{
    bezier_roots, evaluate_spline, height_to_y, path_control_points, sample_spline, x_to_time,
};

/// Bind every graph on the page with the default configuration
///
/// Returns the number of elements that received listeners.
#[wasm_bindgen(js_name = bindGraphs)]
pub fn init() -> Result<usize, JsValue> {
    bind(GraphConfig::default())
}

/// Bind every graph on the page with configuration overrides
///
/// Fields missing from `config` keep their defaults.
#[wasm_bindgen(js_name = bindGraphsWithConfig)]
pub fn init_with_config(config: JsValue) -> Result<usize, JsValue> {
    let config: GraphConfig = deserialize(config, "Failed to deserialize graph config")?;
    bind(config)
}

/// Pixel y of the rendered tide curve in `svg` at user-space `x`
///
/// `tide_selector` picks the tide paths; omitted, it is the default
/// `.tide`. NaN when `x` is outside every tide path.
#[wasm_bindgen(js_name = heightAtX)]
pub fn rendered_height_at_x(
    svg: &SvgsvgElement,
    x: f64,
    tide_selector: Option<String>,
) -> Result<f64, JsValue> {
    let selector = tide_selector.unwrap_or_else(|| GraphConfig::default().tide_selector);
    let viewport = dom::svg::viewport(svg).map_err(|e| js_error(e.to_string()))?;
    let curves = dom::svg::tide_curves(svg, &selector).map_err(|e| js_error(e.to_string()))?;
    Ok(height_at_x(&curves, x, viewport.height))
}

fn bind(config: GraphConfig) -> Result<usize, JsValue> {
    dom::init(config)
        .map(|bound| bound.len())
        .map_err(|e| js_error(e.to_string()))
}
