//! Mapping between graph pixels, time and tide height

use crate::config::HeightScale;
use crate::models::AbsoluteTime;

/// Size of the SVG viewBox in user units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Absolute time at pixel `x`; the graph's width spans `day_seconds`
    pub fn x_to_time(&self, reference: AbsoluteTime, x: f64, day_seconds: f64) -> f64 {
        reference as f64 + (x / self.width) * day_seconds
    }

    /// Pixel y for a tide height, measured down from the top
    pub fn height_to_y(&self, height: f64, scale: &HeightScale) -> f64 {
        self.height - ((height + scale.offset) * (self.height / scale.span)).floor()
    }
}
