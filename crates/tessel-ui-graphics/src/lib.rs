//! Pure geometry & units for Tessel layout
//!
//! This crate contains the geometry primitives and unit types that are used
//! throughout the Tessel layout engine. Nothing here knows about nodes or
//! constraints.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::unit::{Dp, Px};
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
