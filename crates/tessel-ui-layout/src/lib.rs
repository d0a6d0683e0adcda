//! Measure/layout contracts, constraints & node tree for Tessel
//!
//! Layout is a two-phase protocol. `measure` decides every node's frame size
//! bottom-up from a [`LayoutConstraint`] handed down by the parent; `layout`
//! then assigns frame offsets top-down from the already measured sizes.
//! Composite containers implement [`LayoutAlgorithm`] and reach their
//! children through a [`LayoutWrapper`].

mod algorithm;
mod alignment;
mod box_layout;
mod constraint;
mod direction;
mod display;
mod geometry_node;
mod property;
mod safe_area;
mod text;
mod tree;
mod wrapper;

pub use algorithm::*;
pub use alignment::*;
pub use box_layout::*;
pub use constraint::*;
pub use direction::*;
pub use display::*;
pub use geometry_node::*;
pub use property::*;
pub use safe_area::*;
pub use text::*;
pub use tree::*;
pub use wrapper::*;

pub use tessel_ui_graphics::{EdgeInsets, Point, Rect, Size};

pub mod prelude {
    pub use crate::algorithm::{LayoutAlgorithm, LayoutAlgorithmFactory};
    pub use crate::constraint::{LayoutConstraint, OptionalSize};
    pub use crate::direction::{correct_offset_x, TextDirection};
    pub use crate::geometry_node::GeometryNode;
    pub use crate::property::LayoutProperty;
    pub use crate::tree::{LayoutTree, NodeId, NodeTag};
    pub use crate::wrapper::{LayoutEnv, LayoutWrapper};
}
