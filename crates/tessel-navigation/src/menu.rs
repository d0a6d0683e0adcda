//! Menu cluster at the trailing edge of a title bar.

use std::rc::Rc;

use tessel_ui_graphics::{Point, Size};
use tessel_ui_layout::{
    correct_offset_x, BoxLayoutAlgorithm, LayoutAlgorithm, LayoutConstraint, LayoutWrapper,
    NodeId,
};

use crate::sizing_policy::SizingPolicy;
use crate::theme::ThemeProvider;

/// Slot taken by child `index` of `count` children when only `cap` fit.
///
/// With overflow the first `cap - 1` children keep their slots and the last
/// child, the "more" item, takes the final one. Everything else gets `None`.
pub fn overflow_slot(index: usize, count: usize, cap: usize) -> Option<usize> {
    if index >= count || cap == 0 {
        return None;
    }
    if count <= cap {
        return Some(index);
    }
    if index + 1 == count {
        return Some(cap - 1);
    }
    (index < cap - 1).then_some(index)
}

/// Lays out framework menu items in a single row of square slots.
///
/// An application-provided menu (`is_custom`) is measured like a plain box.
pub struct MenuLayoutAlgorithm {
    theme: Rc<dyn ThemeProvider>,
    custom: BoxLayoutAlgorithm,
    slots: Vec<(NodeId, Option<usize>)>,
    item_pitch: f32,
}

impl MenuLayoutAlgorithm {
    pub fn new(theme: Rc<dyn ThemeProvider>) -> Self {
        Self {
            theme,
            custom: BoxLayoutAlgorithm::default(),
            slots: Vec::new(),
            item_pitch: 0.0,
        }
    }
}

impl LayoutAlgorithm for MenuLayoutAlgorithm {
    fn measure(&mut self, wrapper: &mut LayoutWrapper<'_>) {
        self.slots.clear();
        if wrapper.layout_property().is_custom() {
            self.custom.measure(wrapper);
            return;
        }
        let constraint = wrapper.layout_constraint().normalized();
        let Some(policy) = SizingPolicy::for_wrapper(wrapper, &*self.theme) else {
            for child in wrapper.children() {
                wrapper.measure_hidden_child(child);
                self.slots.push((child, None));
            }
            wrapper.set_frame_size(Size::ZERO);
            return;
        };

        // The title bar passes its own width as the parent ideal width.
        let header_width = constraint
            .parent_ideal_size
            .width
            .unwrap_or_else(|| constraint.max_resolved().width);
        let cap = policy.max_menu_items(header_width);
        let count = wrapper.total_child_count();
        let item = LayoutConstraint::tight(Size::square(policy.menu_item_size));

        for index in 0..count {
            let Some(child) = wrapper.child_by_index(index) else {
                continue;
            };
            let slot = overflow_slot(index, count, cap);
            match slot {
                Some(_) => {
                    wrapper.measure_child(child, item);
                }
                None => wrapper.measure_hidden_child(child),
            }
            self.slots.push((child, slot));
        }
        self.item_pitch = policy.menu_item_size + policy.menu_item_gap;

        let visible = policy.visible_menu_items(count, header_width);
        let height = if visible > 0 { policy.menu_item_size } else { 0.0 };
        let natural = Size::new(policy.menu_width(visible), height);
        wrapper.set_frame_size(constraint.resolve(natural));
    }

    fn layout(&mut self, wrapper: &mut LayoutWrapper<'_>) {
        if wrapper.layout_property().is_custom() {
            self.custom.layout(wrapper);
            return;
        }
        let frame = wrapper.frame_size();
        let is_rtl = wrapper.is_rtl();
        for (child, slot) in self.slots.clone() {
            let Some(slot) = slot else {
                wrapper.place_hidden_child(child);
                continue;
            };
            let size = wrapper.child_frame_size(child);
            let start = slot as f32 * self.item_pitch;
            let x = correct_offset_x(start, frame.width, size.width, is_rtl);
            let y = ((frame.height - size.height) / 2.0).max(0.0);
            wrapper.place_child(child, Point::new(x, y));
        }
    }
}

#[cfg(test)]
#[path = "tests/menu_tests.rs"]
mod tests;
