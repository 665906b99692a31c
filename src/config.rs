//! Graph configuration
//!
//! Defaults match the markup produced by the server-side renderer. Pages
//! with different markup can pass overrides to `bindGraphsWithConfig`; any field
//! left out keeps its default.

use serde::{Deserialize, Serialize};

/// How the marker dot's y-coordinate is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStrategy {
    /// Sample the rendered path; fall back to the analytic formula on NaN
    #[default]
    RenderedCurve,
    /// Convert the spline height to pixels directly
    Analytic,
}

/// Vertical scale used by the analytic height-to-pixel formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightScale {
    /// Height (ft) added before scaling, so the lowest drawn tide sits at 0
    pub offset: f64,
    /// Total height range (ft) spanned by the viewport
    pub span: f64,
}

impl Default for HeightScale {
    fn default() -> Self {
        Self { offset: 2.0, span: 10.0 }
    }
}

/// Selectors, marker appearance and feed settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Elements that receive pointer and touch listeners
    pub glance_selector: String,

    /// Hidden text node holding the spline JSON
    pub spline_selector: String,

    /// Hidden text node holding the reference date
    pub date_selector: String,

    /// Rendered tide paths
    pub tide_selector: String,

    /// Tooltip, looked up from the SVG's parent
    pub tooltip_selector: String,

    pub marker_id: String,
    pub marker_radius: f64,
    pub marker_strategy: MarkerStrategy,

    /// Seconds spanned by the full width of the graph
    pub day_seconds: f64,

    pub height_scale: HeightScale,

    /// Good-times endpoint, relative to the page
    pub feed_url: String,

    /// Container the good-times list is rendered into
    pub feed_container_id: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            glance_selector: ".goodtime_glance".to_string(),
            spline_selector: ".spline".to_string(),
            date_selector: ".unixtime".to_string(),
            tide_selector: ".tide".to_string(),
            tooltip_selector: ".tooltip".to_string(),
            marker_id: "dot".to_string(),
            marker_radius: 10.0,
            marker_strategy: MarkerStrategy::default(),
            day_seconds: 24.0 * 60.0 * 60.0,
            height_scale: HeightScale::default(),
            feed_url: "api/v1/goodtimes?o=json".to_string(),
            feed_container_id: "goodtimes".to_string(),
        }
    }
}
