//! Pure math/data for positioning the overscroll container's content.
//!
//! Geometry primitives and density-independent units shared by the input,
//! animation and container crates.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::unit::Dp;
}
