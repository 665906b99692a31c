//! Parsing of data embedded in the rendered graph
//!
//! - `path_data`: control points from an SVG path's `d` attribute
//! - `payload`: the JSON spline and the reference date

pub mod path_data;
pub mod payload;

pub use path_data::{control_points, numeric_tokens};
pub use payload::{parse_reference_date, parse_spline};
