//! Bottom toolbar of a navigation bar.

use std::rc::Rc;

use tessel_ui_graphics::{Point, Size};
use tessel_ui_layout::{
    correct_offset_x, BoxLayoutAlgorithm, DeviceType, DisplayInfo, LayoutAlgorithm,
    LayoutConstraint, LayoutWrapper, NodeId,
};

use crate::menu::overflow_slot;
use crate::sizing_policy::SizingPolicy;
use crate::theme::ThemeProvider;

/// Whether the toolbar auto-hides at `width` on the current column grid.
///
/// Phones hide once the grid reaches `rotation_limit` columns and the toolbar
/// spans at least that many columns. Tablets need a strictly wider grid and an
/// extra gutter on each side. Other devices never auto-hide.
pub fn check_whether_need_to_hide_toolbar(
    display: &DisplayInfo,
    width: f32,
    rotation_limit: u32,
) -> bool {
    let grid = &display.grid;
    let limit_width = grid.span_width(rotation_limit);
    match display.device_type {
        DeviceType::Phone => grid.columns >= rotation_limit && width >= limit_width,
        DeviceType::Tablet => {
            grid.columns > rotation_limit && width > limit_width + 2.0 * grid.gutter_width
        }
        DeviceType::Other => false,
    }
}

/// Spreads toolbar items over equal-width slots.
///
/// At most `toolbar_max_items` slots exist; with more items the last child
/// takes the final slot as the "more" item. A custom toolbar is measured like
/// a plain box.
pub struct ToolBarLayoutAlgorithm {
    theme: Rc<dyn ThemeProvider>,
    custom: BoxLayoutAlgorithm,
    slots: Vec<(NodeId, Option<usize>)>,
    slot_width: f32,
}

impl ToolBarLayoutAlgorithm {
    pub fn new(theme: Rc<dyn ThemeProvider>) -> Self {
        Self {
            theme,
            custom: BoxLayoutAlgorithm::default(),
            slots: Vec::new(),
            slot_width: 0.0,
        }
    }
}

impl LayoutAlgorithm for ToolBarLayoutAlgorithm {
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

        let frame = constraint.resolve(Size::new(
            constraint.max_resolved().width,
            policy.toolbar_height,
        ));
        let count = wrapper.total_child_count();
        let cap = policy.toolbar_max_items as usize;
        let visible = count.min(cap);
        self.slot_width = if visible > 0 {
            frame.width / visible as f32
        } else {
            0.0
        };
        let item = LayoutConstraint::loose(Size::new(self.slot_width, frame.height))
            .with_self_ideal_width(self.slot_width);

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
        wrapper.set_frame_size(frame);
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
            let x = slot as f32 * self.slot_width + (self.slot_width - size.width).max(0.0) / 2.0;
            let x = correct_offset_x(x, frame.width, size.width, is_rtl);
            let y = ((frame.height - size.height) / 2.0).max(0.0);
            wrapper.place_child(child, Point::new(x, y));
        }
    }
}

#[cfg(test)]
#[path = "tests/tool_bar_tests.rs"]
mod tests;
