//! SVG lookups and coordinate transforms

use wasm_bindgen::JsCast;
use web_sys::{Element, SvgPathElement, SvgsvgElement};

use crate::error::{GraphError, Result};
use crate::graph::Viewport;
use crate::math::{RenderedPath, TaggedCurve};
use crate::models::ControlPoint;
use crate::parse::control_points;

impl RenderedPath for SvgPathElement {
    fn total_length(&self) -> f64 {
        self.get_total_length() as f64
    }

    fn point_at_length(&self, offset: f64) -> Option<ControlPoint> {
        self.get_point_at_length(offset as f32)
            .ok()
            .map(|p| ControlPoint::new(p.x() as f64, p.y() as f64))
    }
}

/// Closest `<svg>` to `start`
///
/// Walks from `start` toward the document root, returning the element itself
/// if it is an `<svg>`, otherwise the first `<svg>` descendant of the
/// nearest ancestor that has one.
pub fn find_svg(start: &Element) -> Result<SvgsvgElement> {
    let mut current = Some(start.clone());

    while let Some(element) = current {
        if let Some(svg) = element.dyn_ref::<SvgsvgElement>() {
            return Ok(svg.clone());
        }
        if let Some(found) = element.query_selector("svg")? {
            return found.dyn_into::<SvgsvgElement>().map_err(|_| GraphError::SvgNotFound);
        }
        current = element.parent_element();
    }

    Err(GraphError::SvgNotFound)
}

/// Map client (viewport pixel) coordinates into the SVG's user space
pub fn client_to_svg(svg: &SvgsvgElement, client_x: f64, client_y: f64) -> Result<ControlPoint> {
    let ctm = svg
        .get_screen_ctm()
        .ok_or_else(|| GraphError::Js("SVG has no screen transform".to_string()))?;
    let inverse = ctm.inverse()?;

    let point = svg.create_svg_point();
    point.set_x(client_x as f32);
    point.set_y(client_y as f32);
    let mapped = point.matrix_transform(&inverse);

    Ok(ControlPoint::new(mapped.x() as f64, mapped.y() as f64))
}

/// The SVG's viewBox size
pub fn viewport(svg: &SvgsvgElement) -> Result<Viewport> {
    let rect = svg
        .view_box()
        .base_val()
        .ok_or_else(|| GraphError::missing("svg[viewBox]"))?;
    Ok(Viewport::new(rect.width() as f64, rect.height() as f64))
}

/// Text content of the first descendant matching `selector`
pub fn text_of(svg: &SvgsvgElement, selector: &str) -> Result<String> {
    svg.query_selector(selector)?
        .and_then(|el| el.text_content())
        .ok_or_else(|| GraphError::missing(selector))
}

/// Every rendered tide path, paired with its control points
///
/// Paths with unusable `d` data are skipped with a warning.
pub fn tide_curves(svg: &SvgsvgElement, selector: &str) -> Result<Vec<TaggedCurve<SvgPathElement>>> {
    let nodes = svg.query_selector_all(selector)?;
    let mut curves = Vec::with_capacity(nodes.length() as usize);

    for i in 0..nodes.length() {
        let Some(path) = nodes.item(i).and_then(|n| n.dyn_into::<SvgPathElement>().ok()) else {
            continue;
        };
        let Some(d) = path.get_attribute("d") else {
            continue;
        };
        match control_points(&d) {
            Ok(curve) => curves.push(TaggedCurve::new(curve, path)),
            Err(e) => log::warn!("skipping tide path: {}", e),
        }
    }

    Ok(curves)
}
