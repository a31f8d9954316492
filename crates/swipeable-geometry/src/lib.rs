//! Pure math/data for swipeable views
//!
//! This crate contains the coordinate primitives and the per-axis lookup
//! tables used by the gesture engine and by renderers.

mod axis;
mod geometry;
mod transform;

pub use axis::*;
pub use geometry::*;
pub use transform::*;

pub mod prelude {
    pub use crate::axis::{AxisPoint, Dimension, FlexDirection, ScrollDirection, SwipeAxis};
    pub use crate::geometry::{Point, Size};
    pub use crate::transform::parse_matrix_translation;
}
