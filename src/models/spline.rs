//! Piecewise cubic tide model
//!
//! A spline is an ordered run of cubic segments, each valid over its own
//! half-open `[start, end)` window of absolute time. Heights are evaluated
//! relative to the segment start to keep the cubic terms small.

use serde::{Deserialize, Serialize};

/// Absolute time in seconds since the Unix epoch
pub type AbsoluteTime = i64;

/// One cubic piece of a spline: `a·x³ + b·x² + c·x + d` with `x = t - start`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub start: AbsoluteTime,
    pub end: AbsoluteTime,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CubicSegment {
    /// Whether `t` falls within `[start, end)`
    pub fn covers(&self, t: f64) -> bool {
        self.start as f64 <= t && t < self.end as f64
    }

    /// Evaluate the polynomial at `t` without checking the window
    pub fn polynomial(&self, t: f64) -> f64 {
        let x = t - self.start as f64;
        ((self.a * x + self.b) * x + self.c) * x + self.d
    }

    /// Evaluate at `t`, or NaN when `t` is outside `[start, end)`
    pub fn eval(&self, t: f64) -> f64 {
        if self.covers(t) {
            self.polynomial(t)
        } else {
            f64::NAN
        }
    }
}

/// Ordered sequence of cubic segments
///
/// Segments must be sorted ascending by `start` with each `end` at or before
/// the next `start`. Gaps are allowed and evaluate to NaN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spline {
    segments: Vec<CubicSegment>,
}

impl Spline {
    pub fn new(segments: Vec<CubicSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// First start and last end, if any segments exist
    pub fn time_range(&self) -> Option<(AbsoluteTime, AbsoluteTime)> {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => Some((first.start, last.end)),
            _ => None,
        }
    }

    /// Tide height at absolute time `t`
    ///
    /// Binary search over segment windows. Returns NaN for an empty spline or
    /// when `t` lands outside every window. The last segment's `end` is
    /// inclusive so the spline's overall domain is closed.
    pub fn evaluate(&self, t: f64) -> f64 {
        let last = self.segments.len().saturating_sub(1);
        let (mut lo, mut hi) = (0, self.segments.len());

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let segment = &self.segments[mid];
            let end = segment.end as f64;

            if t < segment.start as f64 {
                hi = mid;
            } else if t > end || (t == end && mid != last) {
                lo = mid + 1;
            } else {
                return segment.polynomial(t);
            }
        }

        f64::NAN
    }

    /// `n` evenly spaced heights from the first start to the last end
    pub fn sample(&self, n: usize) -> Vec<f64> {
        let Some((start, end)) = self.time_range() else {
            return Vec::new();
        };
        let start = start as f64;
        match n {
            0 => Vec::new(),
            1 => vec![self.evaluate(start)],
            _ => {
                let step = (end as f64 - start) / (n - 1) as f64;
                (0..n).map(|i| self.evaluate(start + step * i as f64)).collect()
            }
        }
    }
}

impl From<Vec<CubicSegment>> for Spline {
    fn from(segments: Vec<CubicSegment>) -> Self {
        Self::new(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(start: AbsoluteTime, end: AbsoluteTime, d: f64) -> CubicSegment {
        CubicSegment { start, end, a: 0.0, b: 0.0, c: 0.0, d }
    }

    #[test]
    fn test_empty_spline_is_nan() {
        let spline = Spline::default();
        assert!(spline.evaluate(0.0).is_nan());
        assert!(spline.evaluate(1_700_000_000.0).is_nan());
        assert!(spline.sample(5).is_empty());
    }

    #[test]
    fn test_single_constant_segment() {
        let spline = Spline::new(vec![flat(0, 100, 5.0)]);
        for t in [0.0, 0.5, 42.0, 99.0, 99.999] {
            assert_eq!(spline.evaluate(t), 5.0);
        }
        assert!(spline.evaluate(-1.0).is_nan());
        assert!(spline.evaluate(101.0).is_nan());
    }

    #[test]
    fn test_day_split_in_two() {
        let spline = Spline::new(vec![flat(0, 43200, 1.0), flat(43200, 86400, 3.0)]);
        assert_eq!(spline.evaluate(43199.0), 1.0);
        assert_eq!(spline.evaluate(43201.0), 3.0);
        // Shared boundary belongs to the later window
        assert_eq!(spline.evaluate(43200.0), 3.0);
        // Final end is inclusive
        assert_eq!(spline.evaluate(86400.0), 3.0);
    }

    #[test]
    fn test_polynomial_relative_to_start() {
        let segment = CubicSegment { start: 1000, end: 2000, a: 1.0, b: -2.0, c: 3.0, d: 4.0 };
        // x = 2
        assert_eq!(segment.eval(1002.0), 8.0 - 8.0 + 6.0 + 4.0);
        assert!(segment.eval(999.0).is_nan());
        assert!(segment.eval(2000.0).is_nan());
    }

    #[test]
    fn test_binary_search_finds_every_segment() {
        for n in 1..20 {
            let segments: Vec<_> = (0..n)
                .map(|i| CubicSegment {
                    start: i * 100,
                    end: (i + 1) * 100,
                    a: 0.0,
                    b: 0.0,
                    c: 0.01 * i as f64,
                    d: i as f64,
                })
                .collect();
            let spline = Spline::new(segments.clone());
            for segment in &segments {
                let t = segment.start as f64 + 37.0;
                assert_eq!(spline.evaluate(t), segment.polynomial(t), "n={} start={}", n, segment.start);
            }
        }
    }

    #[test]
    fn test_gap_is_nan() {
        let spline = Spline::new(vec![flat(0, 10, 1.0), flat(20, 30, 2.0), flat(30, 40, 3.0)]);
        assert!(spline.evaluate(15.0).is_nan());
        assert!(spline.evaluate(10.0).is_nan());
        assert_eq!(spline.evaluate(20.0), 2.0);
    }

    #[test]
    fn test_sample_spans_domain() {
        let spline = Spline::new(vec![flat(0, 50, 1.0), flat(50, 100, 2.0)]);
        assert_eq!(spline.sample(3), vec![1.0, 2.0, 2.0]);
        assert_eq!(spline.sample(1), vec![1.0]);
        assert!(spline.sample(0).is_empty());
    }

    #[test]
    fn test_deserialize_payload_shape() {
        let spline: Spline = serde_json::from_str(
            r#"[{"start":0,"end":100,"a":0,"b":0,"c":0.5,"d":-1.25}]"#,
        )
        .unwrap();
        assert_eq!(spline.len(), 1);
        assert_eq!(spline.evaluate(10.0), 3.75);
    }
}
