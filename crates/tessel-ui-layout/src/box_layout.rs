//! Default algorithm for plain containers and leaves.

use tessel_ui_graphics::{Point, Size};

use crate::algorithm::LayoutAlgorithm;
use crate::alignment::Alignment;
use crate::constraint::LayoutConstraint;
use crate::direction::correct_offset_x;
use crate::wrapper::LayoutWrapper;

/// Stacks every child in the content box and sizes itself to the largest one.
///
/// A leaf sizes itself from its user size, or to zero plus padding when it has
/// none.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxLayoutAlgorithm {
    alignment: Alignment,
}

impl BoxLayoutAlgorithm {
    pub fn new(alignment: Alignment) -> Self {
        Self { alignment }
    }
}

impl LayoutAlgorithm for BoxLayoutAlgorithm {
    fn measure(&mut self, wrapper: &mut LayoutWrapper<'_>) {
        let property = wrapper.layout_property();
        let padding = property.padding_and_border();
        let constraint = wrapper.layout_constraint().normalized();
        let ideal = constraint.self_ideal_size.or(property.user_size);
        let constraint = constraint.with_self_ideal_size(ideal);

        let content = constraint.deflate(&padding);
        let child_max = Size::new(
            content.self_ideal_size.width.unwrap_or(content.max_size.width),
            content.self_ideal_size.height.unwrap_or(content.max_size.height),
        );
        let child_constraint = LayoutConstraint {
            max_size: child_max,
            percent_reference: child_max,
            ..content.for_child()
        };

        let mut natural = Size::ZERO;
        for child in wrapper.children() {
            let size = wrapper.measure_child(child, child_constraint);
            natural = natural.max(size);
        }

        let size = constraint.resolve(padding.inflate(natural));
        wrapper.set_frame_size(size);
    }

    fn layout(&mut self, wrapper: &mut LayoutWrapper<'_>) {
        let frame = wrapper.frame_size();
        let padding = wrapper.layout_property().padding_and_border();
        let content = padding.deflate(frame);
        let is_rtl = wrapper.is_rtl();

        for child in wrapper.children() {
            let child_size = wrapper.child_frame_size(child);
            let aligned = self.alignment.offset(content, child_size);
            let start = padding.left + aligned.x;
            let x = correct_offset_x(start, frame.width, child_size.width, is_rtl);
            wrapper.place_child(child, Point::new(x, padding.top + aligned.y));
        }
    }
}
