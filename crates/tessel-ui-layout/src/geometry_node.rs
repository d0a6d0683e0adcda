//! Per-node resolved geometry.

use crate::constraint::LayoutConstraint;
use tessel_ui_graphics::{Point, Rect, Size};

/// Frame of a single node as resolved by layout.
///
/// `frame_size` is written by `measure`, `frame_offset` by the parent's
/// `layout`. The constraint the node was last measured under is retained so a
/// later pass can tell whether the node needs measuring again.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryNode {
    frame_size: Size,
    frame_offset: Point,
    parent_layout_constraint: Option<LayoutConstraint>,
}

impl GeometryNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_size(&self) -> Size {
        self.frame_size
    }

    /// Stores the measured size; negative components are clamped to zero.
    pub fn set_frame_size(&mut self, size: Size) {
        let clamped = size.non_negative();
        if clamped != size {
            log::debug!("frame size {size:?} clamped to {clamped:?}");
        }
        self.frame_size = clamped;
    }

    pub fn frame_offset(&self) -> Point {
        self.frame_offset
    }

    pub fn set_frame_offset(&mut self, offset: Point) {
        self.frame_offset = offset;
    }

    pub fn frame_rect(&self) -> Rect {
        Rect::from_origin_size(self.frame_offset, self.frame_size)
    }

    pub fn parent_layout_constraint(&self) -> Option<LayoutConstraint> {
        self.parent_layout_constraint
    }

    pub fn set_parent_layout_constraint(&mut self, constraint: LayoutConstraint) {
        self.parent_layout_constraint = Some(constraint);
    }

    /// Collapses the frame to a zero-sized box at the origin.
    pub fn reset(&mut self) {
        self.frame_size = Size::ZERO;
        self.frame_offset = Point::ZERO;
    }
}
