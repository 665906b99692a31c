//! What the graph shows for one pointer position
//!
//! Pure composition of the spline model, viewport mapping and marker
//! strategy. The DOM layer supplies the inputs and applies the result.

use crate::config::{GraphConfig, HeightScale, MarkerStrategy};
use crate::models::{AbsoluteTime, Spline};

use super::label::tooltip_text;
use super::viewport::Viewport;

/// Everything derived from a pointer at SVG x-coordinate `x`
#[derive(Debug, Clone, PartialEq)]
pub struct GraphReading {
    pub x: f64,
    pub time: f64,
    pub height: f64,
    /// `None` when the height is not finite; the tooltip is hidden
    pub tooltip: Option<String>,
    /// NaN when neither strategy can place the marker
    pub marker_y: f64,
}

impl GraphReading {
    /// Marker centre, if it can be placed
    pub fn marker(&self) -> Option<(f64, f64)> {
        self.marker_y.is_finite().then_some((self.x, self.marker_y))
    }
}

/// Marker y for a tide `height`
///
/// `sample_curve` is only called for [`MarkerStrategy::RenderedCurve`]; a
/// non-finite sample falls back to the analytic formula.
pub fn marker_y(
    strategy: MarkerStrategy,
    height: f64,
    viewport: &Viewport,
    scale: &HeightScale,
    sample_curve: impl FnOnce() -> f64,
) -> f64 {
    let analytic = || viewport.height_to_y(height, scale);
    match strategy {
        MarkerStrategy::Analytic => analytic(),
        MarkerStrategy::RenderedCurve => {
            let sampled = sample_curve();
            if sampled.is_finite() {
                sampled
            } else {
                analytic()
            }
        }
    }
}

/// Read the graph at SVG x-coordinate `x`
pub fn read_graph(
    spline: &Spline,
    reference: AbsoluteTime,
    viewport: &Viewport,
    x: f64,
    config: &GraphConfig,
    format_time: impl FnOnce(f64) -> Option<String>,
    sample_curve: impl FnOnce() -> f64,
) -> GraphReading {
    let time = viewport.x_to_time(reference, x, config.day_seconds);
    let height = spline.evaluate(time);
    let tooltip = format_time(time).and_then(|label| tooltip_text(height, &label));
    let marker_y = marker_y(
        config.marker_strategy,
        height,
        viewport,
        &config.height_scale,
        sample_curve,
    );

    GraphReading { x, time, height, tooltip, marker_y }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CubicSegment;

    fn day_spline() -> Spline {
        let flat = |start, end, d| CubicSegment { start, end, a: 0.0, b: 0.0, c: 0.0, d };
        Spline::new(vec![flat(0, 43_200, 1.0), flat(43_200, 86_400, 3.0)])
    }

    fn label(t: f64) -> Option<String> {
        Some(format!("t{}", t))
    }

    #[test]
    fn test_reading_left_half() {
        let viewport = Viewport::new(864.0, 400.0);
        let config = GraphConfig::default();
        let reading = read_graph(&day_spline(), 0, &viewport, 108.0, &config, label, || 123.0);
        assert_eq!(reading.time, 10_800.0);
        assert_eq!(reading.height, 1.0);
        assert_eq!(reading.tooltip.as_deref(), Some("tide is 1.0 ft at t10800"));
        assert_eq!(reading.marker(), Some((108.0, 123.0)));
    }

    #[test]
    fn test_sample_failure_falls_back_to_formula() {
        let viewport = Viewport::new(864.0, 400.0);
        let config = GraphConfig::default();
        let reading = read_graph(&day_spline(), 0, &viewport, 600.0, &config, label, || f64::NAN);
        assert_eq!(reading.height, 3.0);
        // 400 - floor(5 * 40)
        assert_eq!(reading.marker_y, 200.0);
    }

    #[test]
    fn test_analytic_strategy_skips_sampling() {
        let viewport = Viewport::new(864.0, 400.0);
        let config = GraphConfig { marker_strategy: MarkerStrategy::Analytic, ..Default::default() };
        let reading = read_graph(&day_spline(), 0, &viewport, 100.0, &config, label, || {
            panic!("rendered curve must not be sampled")
        });
        // 400 - floor(3 * 40)
        assert_eq!(reading.marker_y, 280.0);
    }

    #[test]
    fn test_outside_spline_hides_everything() {
        let viewport = Viewport::new(864.0, 400.0);
        let config = GraphConfig::default();
        let reading =
            read_graph(&day_spline(), 100_000, &viewport, 10.0, &config, label, || f64::NAN);
        assert!(reading.height.is_nan());
        assert!(reading.tooltip.is_none());
        assert!(reading.marker().is_none());
    }
}
