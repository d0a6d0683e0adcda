//! Alignment of a child inside the content box of its parent.

use tessel_ui_graphics::{Point, Size};

/// Position along one axis, in leading-to-trailing terms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisAlignment {
    #[default]
    Start,
    Center,
    End,
}

impl AxisAlignment {
    /// Offset of a `child` extent inside an `available` extent. Never negative:
    /// an oversized child starts at the leading edge.
    pub fn align(self, available: f32, child: f32) -> f32 {
        match self {
            AxisAlignment::Start => 0.0,
            AxisAlignment::Center => ((available - child) / 2.0).max(0.0),
            AxisAlignment::End => (available - child).max(0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Alignment {
    pub horizontal: AxisAlignment,
    pub vertical: AxisAlignment,
}

impl Alignment {
    pub const fn new(horizontal: AxisAlignment, vertical: AxisAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    pub const TOP_START: Self = Self::new(AxisAlignment::Start, AxisAlignment::Start);

    pub const CENTER: Self = Self::new(AxisAlignment::Center, AxisAlignment::Center);

    pub const CENTER_START: Self = Self::new(AxisAlignment::Start, AxisAlignment::Center);

    /// Left-to-right offset of `child` inside `available`.
    pub fn offset(&self, available: Size, child: Size) -> Point {
        Point::new(
            self.horizontal.align(available.width, child.width),
            self.vertical.align(available.height, child.height),
        )
    }
}
