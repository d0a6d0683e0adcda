//! Title bar: back button, title block and menu in one header row.
//!
//! Measure order is back button, menu, subtitle, title. The back button and
//! the menu claim their widths first; the title block gets what is left. The
//! subtitle is measured before the title so the title's height budget can
//! account for it.
//!
//! Header height depends on the API generation. The theme-driven path uses a
//! fixed height per mode (FREE follows the scroll coordinator). The legacy
//! path grows the header to fit its content.

use std::rc::Rc;

use tessel_ui_graphics::{non_negative, Point, Size};
use tessel_ui_layout::{
    correct_offset_x, LayoutAlgorithm, LayoutConstraint, LayoutWrapper, NodeId, NodeTag,
    OptionalSize, TitleMode,
};

use crate::header_text::inherited_title_mode;
use crate::scroll_coordinator::TitleBarScrollCoordinator;
use crate::sizing_policy::{SizingPolicy, SUBTITLE_HEIGHT_RATIO};
use crate::theme::ThemeProvider;

/// Container the title bar belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TitleBarParentType {
    /// Root navigation bar: the back button only shows in MINI mode.
    #[default]
    NavBar,
    /// Destination page: the back button shows in every mode.
    NavDestination,
}

/// Header configuration, read from the title bar or else its parent.
#[derive(Clone, Copy, Debug)]
struct HeaderSettings {
    mode: TitleMode,
    hide_back_button: bool,
    title_height: Option<f32>,
}

impl HeaderSettings {
    fn read(wrapper: &LayoutWrapper<'_>) -> Self {
        let own = wrapper.layout_property();
        let parent = wrapper.parent_property();
        let hide_back_button = own
            .hide_back_button
            .or_else(|| parent.and_then(|p| p.hide_back_button))
            .unwrap_or(false);
        let title_height = own
            .title_height
            .or_else(|| parent.and_then(|p| p.title_height))
            .filter(|height| height.is_finite())
            .map(non_negative);
        Self {
            mode: inherited_title_mode(wrapper.tree(), wrapper.node_id()),
            hide_back_button,
            title_height,
        }
    }
}

/// What layout needs from the last measure.
#[derive(Clone, Copy, Debug, Default)]
struct HeaderMetrics {
    back_button: Option<NodeId>,
    back_button_visible: bool,
    title: Option<NodeId>,
    subtitle: Option<NodeId>,
    menu: Option<NodeId>,
    menu_visible: bool,
    padding_start: f32,
    padding_end: f32,
    /// Leading x of the title block, before mirroring.
    title_start: f32,
    title_width_budget: f32,
    title_subtitle_gap: f32,
    single_line_height: f32,
}

pub struct TitleBarLayoutAlgorithm {
    theme: Rc<dyn ThemeProvider>,
    scroll: TitleBarScrollCoordinator,
    parent_type: TitleBarParentType,
    metrics: Option<HeaderMetrics>,
}

impl TitleBarLayoutAlgorithm {
    pub fn new(
        theme: Rc<dyn ThemeProvider>,
        scroll: TitleBarScrollCoordinator,
        parent_type: TitleBarParentType,
    ) -> Self {
        Self {
            theme,
            scroll,
            parent_type,
            metrics: None,
        }
    }

    /// Width left for the title block after the last measure.
    pub fn title_width_budget(&self) -> Option<f32> {
        self.metrics.map(|metrics| metrics.title_width_budget)
    }

    fn back_button_applies(&self, mode: TitleMode) -> bool {
        match self.parent_type {
            TitleBarParentType::NavDestination => true,
            TitleBarParentType::NavBar => mode == TitleMode::Mini,
        }
    }

    fn measure_hidden(&mut self, wrapper: &mut LayoutWrapper<'_>) {
        self.metrics = None;
        for child in wrapper.children() {
            wrapper.measure_hidden_child(child);
        }
        wrapper.set_frame_size(Size::ZERO);
    }
}

impl LayoutAlgorithm for TitleBarLayoutAlgorithm {
    fn measure(&mut self, wrapper: &mut LayoutWrapper<'_>) {
        let constraint = wrapper.layout_constraint().normalized();
        if constraint.self_ideal_size.to_size().is_some_and(|size| size.is_zero()) {
            self.measure_hidden(wrapper);
            return;
        }
        let Some(policy) = SizingPolicy::for_wrapper(wrapper, &*self.theme) else {
            self.measure_hidden(wrapper);
            return;
        };
        let settings = HeaderSettings::read(wrapper);
        let width = constraint.self_ideal_size.width.unwrap_or_else(|| {
            if constraint.has_bounded_width() {
                constraint.max_size.width
            } else {
                wrapper.env().display.window_size.width
            }
        });

        let back_button = wrapper.child_by_tag(NodeTag::BackButton);
        let menu = wrapper.child_by_tag(NodeTag::Menu);
        let title = wrapper.child_by_tag(NodeTag::Title);
        let subtitle = wrapper.child_by_tag(NodeTag::Subtitle);

        // Back button.
        let mut occupied_start = policy.padding_start;
        let back_button_visible = back_button.is_some()
            && !settings.hide_back_button
            && self.back_button_applies(settings.mode);
        if let Some(id) = back_button {
            if back_button_visible {
                let size = Size::new(policy.back_button_width, policy.back_button_height);
                let measured = wrapper.measure_child(id, LayoutConstraint::tight(size));
                occupied_start += measured.width + policy.back_button_margin;
            } else {
                wrapper.measure_hidden_child(id);
            }
        }

        // Menu, capped to a single-line slot.
        let mut occupied_end = policy.padding_end;
        let mut menu_visible = false;
        if let Some(id) = menu {
            let available = non_negative(width - occupied_start - occupied_end);
            let menu_constraint =
                LayoutConstraint::loose(Size::new(available, policy.single_line_height))
                    .with_parent_ideal_size(OptionalSize::new(Some(width), None));
            let measured = wrapper.measure_child(id, menu_constraint);
            if measured.width > 0.0 {
                occupied_end += measured.width + policy.title_menu_margin;
                menu_visible = true;
            }
        }

        let title_width_budget = non_negative(width - occupied_start - occupied_end);
        if title_width_budget == 0.0 {
            log::debug!("title bar {} leaves no width for the title", wrapper.node_id());
        }

        // Height the subtitle cap and the title budget are computed against.
        let has_subtitle = subtitle.is_some();
        if settings.mode == TitleMode::Free {
            self.scroll
                .set_height_bounds(policy.single_line_height, policy.full_height(has_subtitle));
        }
        let mode_height = match settings.mode {
            TitleMode::Free if !policy.is_legacy() => non_negative(self.scroll.header_height()),
            mode => policy.header_height(mode, has_subtitle),
        };
        let reference_height = settings.title_height.unwrap_or(mode_height);

        let mut subtitle_height = 0.0;
        if let Some(id) = subtitle {
            let cap = reference_height * SUBTITLE_HEIGHT_RATIO;
            let subtitle_constraint =
                LayoutConstraint::loose(Size::new(title_width_budget, cap));
            let measured = wrapper.measure_child(id, subtitle_constraint);
            subtitle_height = measured.height;
        }
        let gap = if subtitle_height > 0.0 {
            policy.title_subtitle_gap
        } else {
            0.0
        };
        let title_height_budget = if has_subtitle {
            non_negative(reference_height - subtitle_height - gap)
        } else {
            reference_height
        };

        let mut title_height = 0.0;
        if let Some(id) = title {
            // Legacy headers grow to fit the title; theme-driven ones give it
            // a single-line slot inside the budget.
            let title_constraint = if policy.is_legacy() {
                LayoutConstraint::loose(Size::new(title_width_budget, f32::INFINITY))
            } else {
                LayoutConstraint::loose(Size::new(title_width_budget, title_height_budget))
                    .with_self_ideal_height(title_height_budget.min(policy.single_line_height))
            };
            title_height = wrapper.measure_child(id, title_constraint).height;
        }

        let header_height = match settings.title_height {
            Some(height) => height,
            None if policy.is_legacy() => {
                let content = policy.vertical_padding * 2.0 + title_height + gap + subtitle_height;
                // FREE still follows the scroll coordinator on the legacy path.
                let minimum = if settings.mode == TitleMode::Free {
                    non_negative(self.scroll.header_height())
                } else {
                    mode_height
                };
                minimum.max(content)
            }
            None => mode_height,
        };

        wrapper.measure_unmaterialized_hidden();

        self.metrics = Some(HeaderMetrics {
            back_button,
            back_button_visible,
            title,
            subtitle,
            menu,
            menu_visible,
            padding_start: policy.padding_start,
            padding_end: policy.padding_end,
            title_start: occupied_start,
            title_width_budget,
            title_subtitle_gap: gap,
            single_line_height: policy.single_line_height,
        });
        wrapper.set_frame_size(constraint.resolve(Size::new(width, header_height)));
    }

    fn layout(&mut self, wrapper: &mut LayoutWrapper<'_>) {
        let Some(metrics) = self.metrics else {
            for child in wrapper.children() {
                wrapper.place_hidden_child(child);
            }
            return;
        };
        let frame = wrapper.frame_size();
        let is_rtl = wrapper.is_rtl();

        if let Some(id) = metrics.back_button {
            if metrics.back_button_visible {
                let size = wrapper.child_frame_size(id);
                let x = correct_offset_x(metrics.padding_start, frame.width, size.width, is_rtl);
                let y = non_negative((frame.height - size.height) / 2.0);
                wrapper.place_child(id, Point::new(x, y));
            } else {
                wrapper.place_hidden_child(id);
            }
        }

        // Title and subtitle are centered as one block.
        let title_size = metrics
            .title
            .map(|id| wrapper.child_frame_size(id))
            .unwrap_or(Size::ZERO);
        let subtitle_size = metrics
            .subtitle
            .map(|id| wrapper.child_frame_size(id))
            .unwrap_or(Size::ZERO);
        let block_height = title_size.height + metrics.title_subtitle_gap + subtitle_size.height;
        let block_top = non_negative((frame.height - block_height) / 2.0);
        if let Some(id) = metrics.title {
            let x = correct_offset_x(metrics.title_start, frame.width, title_size.width, is_rtl);
            wrapper.place_child(id, Point::new(x, block_top));
        }
        if let Some(id) = metrics.subtitle {
            let x = correct_offset_x(metrics.title_start, frame.width, subtitle_size.width, is_rtl);
            let y = block_top + title_size.height + metrics.title_subtitle_gap;
            wrapper.place_child(id, Point::new(x, y));
        }

        if let Some(id) = metrics.menu {
            if metrics.menu_visible {
                let size = wrapper.child_frame_size(id);
                let max_x = non_negative(frame.width - size.width);
                let x = (frame.width - metrics.padding_end - size.width).clamp(0.0, max_x);
                let x = correct_offset_x(x, frame.width, size.width, is_rtl);
                let slot = metrics.single_line_height.min(frame.height);
                let y = non_negative((slot - size.height) / 2.0);
                wrapper.place_child(id, Point::new(x, y));
            } else {
                wrapper.place_hidden_child(id);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/title_bar_tests.rs"]
mod tests;
