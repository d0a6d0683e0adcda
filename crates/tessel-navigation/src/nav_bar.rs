//! Navigation bar: title bar, content, toolbar divider and toolbar stacked
//! vertically.
//!
//! Measure order is title bar, toolbar, divider, then content, since the
//! content height is whatever the bars leave over. For every bounded
//! measurement the frame height equals the sum of the four in-frame heights.
//! Content may extend past its in-frame height under a safe-area inset it was
//! allowed to overlap; the overlap is taken back when content is placed.

use std::rc::Rc;

use tessel_ui_graphics::{non_negative, Point, Size};
use tessel_ui_layout::{
    correct_offset_x, LayoutAlgorithm, LayoutConstraint, LayoutProperty, LayoutWrapper, NodeId,
    NodeTag,
};

use crate::keyboard::KeyboardAvoidance;
use crate::overlap::{EdgePositions, SafeAreaOverlap};
use crate::sizing_policy::SizingPolicy;
use crate::theme::ThemeProvider;
use crate::tool_bar::check_whether_need_to_hide_toolbar;

#[derive(Clone, Copy, Debug)]
struct NavBarMetrics {
    title_bar: Option<NodeId>,
    title_bar_height: f32,
    content: NodeId,
    /// Content height inside the frame, without safe-area overlap.
    content_height: f32,
    tool_bar: Option<NodeId>,
    tool_bar_height: f32,
    divider: Option<NodeId>,
    divider_height: f32,
    auto_height: bool,
    overlap: SafeAreaOverlap,
}

pub struct NavBarLayoutAlgorithm {
    theme: Rc<dyn ThemeProvider>,
    keyboard: KeyboardAvoidance,
    metrics: Option<NavBarMetrics>,
    /// Set while layout runs its one nested measure.
    remeasuring: bool,
}

impl NavBarLayoutAlgorithm {
    pub fn new(theme: Rc<dyn ThemeProvider>, keyboard: KeyboardAvoidance) -> Self {
        Self {
            theme,
            keyboard,
            metrics: None,
            remeasuring: false,
        }
    }

    fn edge_positions(
        wrapper: &LayoutWrapper<'_>,
        property: &LayoutProperty,
        title_bar_height: f32,
        tool_bar_height: f32,
        frame_height: f32,
    ) -> EdgePositions {
        let top = wrapper.global_offset().y;
        EdgePositions {
            title_bar_hidden: property.is_title_bar_hidden() || title_bar_height == 0.0,
            title_bar_top: top,
            tool_bar_hidden: property.is_tool_bar_hidden() || tool_bar_height == 0.0,
            tool_bar_bottom: top + frame_height,
            window_height: wrapper.env().display.window_size.height,
        }
    }
}

impl LayoutAlgorithm for NavBarLayoutAlgorithm {
    fn measure(&mut self, wrapper: &mut LayoutWrapper<'_>) {
        self.metrics = None;
        let constraint = wrapper.layout_constraint().normalized();
        let property = wrapper.layout_property().clone();
        let Some(content) = wrapper.child_by_tag(NodeTag::Content) else {
            log::warn!("nav bar {} has no content child", wrapper.node_id());
            for child in wrapper.children() {
                wrapper.measure_hidden_child(child);
            }
            wrapper.set_frame_size(Size::ZERO);
            return;
        };
        let policy = SizingPolicy::for_wrapper(wrapper, &*self.theme);
        let display = wrapper.env().display;

        let ideal = constraint.self_ideal_size.or(property.user_size);
        let width = ideal.width.unwrap_or(if constraint.has_bounded_width() {
            constraint.max_size.width
        } else {
            display.window_size.width
        });
        let auto_height = ideal.height.is_none() && !constraint.has_bounded_height();
        let available_height = ideal.height.unwrap_or(constraint.max_size.height);

        let title_bar = wrapper.child_by_tag(NodeTag::TitleBar);
        let mut title_bar_height = 0.0;
        if let Some(id) = title_bar {
            if property.is_title_bar_hidden() {
                wrapper.measure_hidden_child(id);
            } else {
                let title_constraint = LayoutConstraint::loose(Size::new(width, available_height))
                    .with_self_ideal_width(width)
                    .with_parent_ideal_size(ideal);
                title_bar_height = wrapper.measure_child(id, title_constraint).height;
            }
        }

        let tool_bar = wrapper.child_by_tag(NodeTag::ToolBar);
        let mut tool_bar_height = 0.0;
        let mut tool_bar_custom = false;
        if let Some(id) = tool_bar {
            tool_bar_custom = wrapper.child_property(id).is_some_and(LayoutProperty::is_custom);
            let empty = wrapper.child_count_of(id) == 0;
            let toolbar_policy = policy.filter(|policy| {
                !check_whether_need_to_hide_toolbar(
                    &display,
                    width,
                    policy.rotation_limit_grid_count,
                )
            });
            match toolbar_policy {
                Some(policy) if !property.is_tool_bar_hidden() && !empty => {
                    let size = Size::new(width, policy.toolbar_height);
                    tool_bar_height =
                        wrapper.measure_child(id, LayoutConstraint::tight(size)).height;
                }
                _ => wrapper.measure_hidden_child(id),
            }
        }

        let divider = wrapper.child_by_tag(NodeTag::ToolBarDivider);
        let mut divider_height = 0.0;
        if let Some(id) = divider {
            match policy {
                Some(policy) if tool_bar_height > 0.0 && !tool_bar_custom => {
                    let size = Size::new(width, policy.toolbar_divider_width);
                    divider_height =
                        wrapper.measure_child(id, LayoutConstraint::tight(size)).height;
                }
                _ => wrapper.measure_hidden_child(id),
            }
        }

        let bars = title_bar_height + tool_bar_height + divider_height;
        let (content_height, overlap) = if auto_height {
            let content_constraint = LayoutConstraint::loose(Size::new(width, f32::INFINITY))
                .with_self_ideal_width(width);
            let height = wrapper.measure_child(content, content_constraint).height;
            (height, SafeAreaOverlap::NONE)
        } else {
            if available_height < bars {
                log::debug!(
                    "nav bar {} bars need {bars}, only {available_height} available",
                    wrapper.node_id()
                );
            }
            let budget = non_negative(available_height - bars);
            let edges = Self::edge_positions(
                wrapper,
                &property,
                title_bar_height,
                tool_bar_height,
                bars + budget,
            );
            let overlap = SafeAreaOverlap::resolve(&property, &edges, &*wrapper.env().safe_area);
            let size = Size::new(width, budget + overlap.total());
            wrapper.measure_child(content, LayoutConstraint::tight(size));
            (budget, overlap)
        };

        wrapper.measure_unmaterialized_hidden();

        self.metrics = Some(NavBarMetrics {
            title_bar,
            title_bar_height,
            content,
            content_height,
            tool_bar,
            tool_bar_height,
            divider,
            divider_height,
            auto_height,
            overlap,
        });
        wrapper.set_frame_size(Size::new(width, bars + content_height));
    }

    fn layout(&mut self, wrapper: &mut LayoutWrapper<'_>) {
        if let Some(metrics) = self.metrics {
            if !metrics.auto_height && !self.remeasuring {
                let property = wrapper.layout_property().clone();
                let edges = Self::edge_positions(
                    wrapper,
                    &property,
                    metrics.title_bar_height,
                    metrics.tool_bar_height,
                    wrapper.frame_size().height,
                );
                let overlap =
                    SafeAreaOverlap::resolve(&property, &edges, &*wrapper.env().safe_area);
                if overlap != metrics.overlap {
                    log::debug!(
                        "safe-area overlap of nav bar {} changed before layout, measuring again",
                        wrapper.node_id()
                    );
                    self.remeasuring = true;
                    self.measure(wrapper);
                    self.remeasuring = false;
                }
            }
        }
        let Some(metrics) = self.metrics else {
            for child in wrapper.children() {
                wrapper.place_hidden_child(child);
            }
            return;
        };

        let frame = wrapper.frame_size();

        if let Some(id) = metrics.title_bar {
            if metrics.title_bar_height > 0.0 {
                place_full_width(wrapper, id, 0.0, frame.width);
            } else {
                wrapper.place_hidden_child(id);
            }
        }

        let content_y = metrics.title_bar_height - metrics.overlap.top - self.keyboard.offset();
        place_full_width(wrapper, metrics.content, content_y, frame.width);

        let tool_bar_y = frame.height - metrics.tool_bar_height;
        if let Some(id) = metrics.tool_bar {
            if metrics.tool_bar_height > 0.0 {
                place_full_width(wrapper, id, tool_bar_y, frame.width);
            } else {
                wrapper.place_hidden_child(id);
            }
        }
        if let Some(id) = metrics.divider {
            if metrics.divider_height > 0.0 {
                place_full_width(wrapper, id, tool_bar_y - metrics.divider_height, frame.width);
            } else {
                wrapper.place_hidden_child(id);
            }
        }
    }
}

/// Places a region flush with the leading edge of the nav bar.
fn place_full_width(wrapper: &mut LayoutWrapper<'_>, id: NodeId, y: f32, parent_width: f32) {
    let width = wrapper.child_frame_size(id).width;
    let x = correct_offset_x(0.0, parent_width, width, wrapper.is_rtl());
    wrapper.place_child(id, Point::new(x, y));
}

#[cfg(test)]
#[path = "tests/nav_bar_tests.rs"]
mod tests;
