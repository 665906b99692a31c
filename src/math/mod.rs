//! Numeric core: Bézier root-finding and rendered-curve sampling
//!
//! Nothing in here touches the DOM; rendered paths are reached through the
//! [`bezier::RenderedPath`] trait.

pub mod roots;
pub mod bezier;

pub use roots::{align, approximately, first_root, roots, EPSILON};
pub use bezier::{height_at_x, RenderedPath, TaggedCurve};
