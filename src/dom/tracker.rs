//! Pointer tracking over tide graphs
//!
//! On every mouse or touch move over a bound element the tracker finds the
//! graph's `<svg>`, maps the pointer into SVG user space, reads the graph at
//! that x-coordinate and writes the tooltip text and marker position back.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, MouseEvent, SvgsvgElement, TouchEvent};

use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::graph::{format_local_time, read_graph, GraphReading};
use crate::math::height_at_x;
use crate::parse::{parse_reference_date, parse_spline};

use super::svg::{client_to_svg, find_svg, text_of, tide_curves, viewport};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Updates tooltips and markers for graphs under the pointer
pub struct PointerTracker {
    config: GraphConfig,
}

impl PointerTracker {
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Register listeners on every element matching the glance selector
    ///
    /// Listeners live for the lifetime of the page. Returns the elements
    /// that were bound.
    pub fn bind_all(self: &Rc<Self>, document: &Document) -> Result<Vec<Element>> {
        let nodes = document.query_selector_all(&self.config.glance_selector)?;
        let mut bound = Vec::with_capacity(nodes.length() as usize);

        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            self.bind(&element)?;
            bound.push(element);
        }

        log::info!(
            "pointer tracking bound to {} element(s) matching {}",
            bound.len(),
            self.config.glance_selector
        );
        Ok(bound)
    }

    /// Register mouse and touch listeners on one element
    pub fn bind(self: &Rc<Self>, element: &Element) -> Result<()> {
        let options = AddEventListenerOptions::new();
        options.set_capture(true);
        options.set_passive(true);

        let tracker = Rc::clone(self);
        let on_mouse = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            tracker.on_mouse_move(&ev);
        });

        let tracker = Rc::clone(self);
        let on_touch = Closure::<dyn FnMut(TouchEvent)>::new(move |ev: TouchEvent| {
            tracker.on_touch_move(&ev);
        });

        // iOS only delivers touchmove when touchstart is also observed
        for (event, callback) in [
            ("touchstart", on_touch.as_ref()),
            ("mousemove", on_mouse.as_ref()),
            ("touchmove", on_touch.as_ref()),
        ] {
            element.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                callback.unchecked_ref::<js_sys::Function>(),
                &options,
            )?;
        }

        on_mouse.forget();
        on_touch.forget();
        Ok(())
    }

    pub fn on_mouse_move(&self, ev: &MouseEvent) {
        let target = ev.target().and_then(|t| t.dyn_into::<Element>().ok());
        self.handle(target, ev.client_x() as f64, ev.client_y() as f64);
    }

    /// Only the first touch point is tracked
    pub fn on_touch_move(&self, ev: &TouchEvent) {
        let Some(touch) = ev.touches().item(0) else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<Element>().ok());
        self.handle(target, touch.client_x() as f64, touch.client_y() as f64);
    }

    fn handle(&self, target: Option<Element>, client_x: f64, client_y: f64) {
        let Some(target) = target else {
            return;
        };
        let result = find_svg(&target).and_then(|svg| self.update_graph(&svg, client_x, client_y));
        if let Err(e) = result {
            log::warn!("graph update failed: {}", e);
        }
    }

    /// Read the graph under client point `(client_x, client_y)` and apply it
    pub fn update_graph(
        &self,
        svg: &SvgsvgElement,
        client_x: f64,
        client_y: f64,
    ) -> Result<GraphReading> {
        let cursor = client_to_svg(svg, client_x, client_y)?;
        let viewport = viewport(svg)?;
        let spline = parse_spline(&text_of(svg, &self.config.spline_selector)?)?;
        let reference = parse_reference_date(&text_of(svg, &self.config.date_selector)?)?;

        let reading = read_graph(
            &spline,
            reference,
            &viewport,
            cursor.x,
            &self.config,
            format_local_time,
            || match tide_curves(svg, &self.config.tide_selector) {
                Ok(curves) => height_at_x(&curves, cursor.x, viewport.height),
                Err(e) => {
                    log::warn!("could not read tide paths: {}", e);
                    f64::NAN
                }
            },
        );
        log::trace!("graph reading {:?}", reading);

        self.apply(svg, &reading)?;
        Ok(reading)
    }

    fn apply(&self, svg: &SvgsvgElement, reading: &GraphReading) -> Result<()> {
        let tooltip = self.tooltip(svg)?;
        match &reading.tooltip {
            Some(text) => {
                tooltip.set_text_content(Some(text.as_str()));
                tooltip.toggle_attribute_with_force("hidden", false)?;
            }
            None => {
                tooltip.toggle_attribute_with_force("hidden", true)?;
            }
        }

        if let Some((x, y)) = reading.marker() {
            let marker = self.marker(svg)?;
            marker.set_attribute("cx", &x.to_string())?;
            marker.set_attribute("cy", &y.to_string())?;
        }
        Ok(())
    }

    /// Tooltip next to the graph, looked up from the SVG's parent
    fn tooltip(&self, svg: &SvgsvgElement) -> Result<Element> {
        let selector = &self.config.tooltip_selector;
        svg.parent_element()
            .ok_or_else(|| GraphError::missing(selector.as_str()))?
            .query_selector(selector)?
            .ok_or_else(|| GraphError::missing(selector.as_str()))
    }

    /// The marker circle, created on first use
    fn marker(&self, svg: &SvgsvgElement) -> Result<Element> {
        let selector = format!("#{}", self.config.marker_id);
        if let Some(existing) = svg.query_selector(&selector)? {
            return Ok(existing);
        }

        let document = svg
            .owner_document()
            .ok_or_else(|| GraphError::Js("SVG is not attached to a document".to_string()))?;
        let dot = document.create_element_ns(Some(SVG_NS), "circle")?;
        dot.set_id(&self.config.marker_id);
        dot.set_attribute("class", &self.config.marker_id)?;
        dot.set_attribute("r", &self.config.marker_radius.to_string())?;
        dot.set_attribute("fill-opacity", "0")?;
        svg.append_child(&dot)?;

        log::debug!("created marker #{}", self.config.marker_id);
        Ok(dot)
    }
}
