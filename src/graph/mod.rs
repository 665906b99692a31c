//! Graph-space mapping shared by the DOM adapter and the JS API
//!
//! - `viewport`: pixel x to time, tide height to pixel y
//! - `label`: clock time and tooltip formatting
//! - `reading`: everything the graph shows for one pointer position

pub mod viewport;
pub mod label;
pub mod reading;

pub use viewport::Viewport;
pub use label::{format_clock_time, format_local_time, tooltip_text};
pub use reading::{marker_y, read_graph, GraphReading};
