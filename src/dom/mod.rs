//! Browser adapter
//!
//! - `svg`: SVG lookup, coordinate transforms, rendered-path sampling
//! - `tracker`: pointer and touch handling for each graph
//! - `feed`: the good-times list

pub mod svg;
pub mod tracker;
pub mod feed;

use std::cell::Cell;
use std::rc::Rc;

use web_sys::Element;

use crate::config::GraphConfig;
use crate::error::{GraphError, Result};

pub use feed::{fetch_good_times, load_good_times, render_good_times, spawn_good_times_feed};
pub use svg::find_svg;
pub use tracker::PointerTracker;

thread_local! {
    static BOUND: Cell<bool> = const { Cell::new(false) };
}

/// Whether `init` has already bound this page
pub fn is_bound() -> bool {
    BOUND.with(Cell::get)
}

/// Bind pointer tracking to every graph and start the good-times feed
///
/// Returns the elements that received listeners. Runs once per page: a
/// second call fails with `GraphError::AlreadyBound` instead of stacking a
/// second tracker and feed fetch on the same elements.
pub fn init(config: GraphConfig) -> Result<Vec<Element>> {
    if is_bound() {
        return Err(GraphError::AlreadyBound);
    }

    let window = web_sys::window().ok_or_else(|| GraphError::Js("no window".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| GraphError::Js("no document".to_string()))?;

    let feed_url = config.feed_url.clone();
    let feed_container = config.feed_container_id.clone();

    let tracker = Rc::new(PointerTracker::new(config));
    let bound = tracker.bind_all(&document)?;
    BOUND.with(|flag| flag.set(true));

    spawn_good_times_feed(window, feed_url, feed_container);
    Ok(bound)
}
