//! Data model for the tide graph
//!
//! This module contains the time-domain spline model, the screen-space
//! Bézier geometry read back from rendered paths, and the records served
//! by the good-times feed.

pub mod point;
pub mod bezier;
pub mod spline;
pub mod goodtime;

// Re-export commonly used types
pub use point::{AlignmentLine, ControlPoint};
pub use bezier::BezierCurve;
pub use spline::{AbsoluteTime, CubicSegment, Spline};
pub use goodtime::GoodTime;
