//! Data embedded as hidden text inside each graph

use crate::error::{GraphError, Result};
use crate::models::{AbsoluteTime, CubicSegment, Spline};

/// Parse the JSON spline payload
///
/// The server writes `null` when it has too few predictions to fit a
/// curve; that reads as an empty spline.
pub fn parse_spline(text: &str) -> Result<Spline> {
    let segments: Option<Vec<CubicSegment>> = serde_json::from_str(text.trim())?;
    Ok(segments.map(Spline::new).unwrap_or_default())
}

/// Parse the graph's reference date (Unix seconds at the left edge)
pub fn parse_reference_date(text: &str) -> Result<AbsoluteTime> {
    let trimmed = text.trim();
    trimmed
        .parse()
        .map_err(|_| GraphError::InvalidReferenceDate(trimmed.to_string()))
}
