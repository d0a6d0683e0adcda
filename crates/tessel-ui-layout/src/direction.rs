//! Reading-direction support.
//!
//! Algorithms compute every horizontal offset as if the flow were
//! left-to-right and pass the finished value through [`correct_offset_x`]
//! exactly once, right before it is written to a geometry node. Mirroring an
//! intermediate value and then adding margins to it mirrors twice.

/// Horizontal reading direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn is_rtl(self) -> bool {
        matches!(self, TextDirection::Rtl)
    }
}

/// Mirrors a leading-edge offset for right-to-left layouts.
///
/// Identity when `is_rtl` is false; otherwise returns
/// `parent_width - offset_x - child_width`.
#[inline]
pub fn correct_offset_x(offset_x: f32, parent_width: f32, child_width: f32, is_rtl: bool) -> f32 {
    if is_rtl {
        parent_width - offset_x - child_width
    } else {
        offset_x
    }
}

#[cfg(test)]
#[path = "tests/direction_tests.rs"]
mod tests;
