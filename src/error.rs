//! Error types for the graph adapter
//!
//! The numeric core reports missing data as NaN or an empty root list;
//! these errors only come from reading the page: locating elements and
//! parsing what is embedded in them.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure while reading graph data from the page
#[derive(Debug, Error)]
pub enum GraphError {
    /// No `<svg>` found walking up from the event target
    #[error("No SVG element found from event target")]
    SvgNotFound,

    /// A required element is absent
    #[error("Missing element: {selector}")]
    MissingElement { selector: String },

    /// The embedded spline JSON could not be parsed
    #[error("Invalid spline payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    /// The embedded reference date is not an integer
    #[error("Invalid reference date: {0:?}")]
    InvalidReferenceDate(String),

    /// A path's `d` attribute held fewer than eight numbers
    #[error("Path data has {found} numeric tokens, need 8")]
    InvalidPathData { found: usize },

    /// The page's graphs already have listeners attached
    #[error("Graphs are already bound on this page")]
    AlreadyBound,

    /// A browser API call threw
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl GraphError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement { selector: selector.into() }
    }
}

impl From<JsValue> for GraphError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<GraphError> for JsValue {
    fn from(err: GraphError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
