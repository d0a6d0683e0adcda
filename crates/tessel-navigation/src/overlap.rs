//! Per-edge decision whether content may extend under the safe area.

use tessel_ui_layout::{
    BarStyle, LayoutProperty, SafeAreaEdges, SafeAreaInsets, SafeAreaProvider, SafeAreaTypes,
};

/// Tolerance when matching a bar edge against a safe-area boundary.
pub const EDGE_EPSILON: f32 = 0.5;

/// Whether content extends under the top system inset.
///
/// All of these must hold: the nav bar asked to ignore the top system safe
/// area, it has no top padding or margin of its own, the title bar is hidden
/// or stacked over content, and the title bar's top edge sits on the inset's
/// lower boundary. A bar that already covers the inset gets no overlap.
pub fn check_top_edge_overlap(
    nav: &LayoutProperty,
    title_bar_hidden: bool,
    title_bar_top: f32,
    safe_area: &SafeAreaInsets,
) -> bool {
    let Some(opts) = nav.ignore_layout_safe_area else {
        return false;
    };
    if !opts.covers(SafeAreaEdges::TOP, SafeAreaTypes::SYSTEM) {
        return false;
    }
    if nav.padding.top != 0.0 || nav.margin.top != 0.0 {
        return false;
    }
    if !title_bar_hidden && nav.title_bar_style_or_default() != BarStyle::Stack {
        return false;
    }
    (title_bar_top - safe_area.top).abs() <= EDGE_EPSILON
}

/// Bottom counterpart of [`check_top_edge_overlap`], keyed on the toolbar.
pub fn check_bottom_edge_overlap(
    nav: &LayoutProperty,
    tool_bar_hidden: bool,
    tool_bar_bottom: f32,
    window_height: f32,
    safe_area: &SafeAreaInsets,
) -> bool {
    let Some(opts) = nav.ignore_layout_safe_area else {
        return false;
    };
    if !opts.covers(SafeAreaEdges::BOTTOM, SafeAreaTypes::SYSTEM) {
        return false;
    }
    if nav.padding.bottom != 0.0 || nav.margin.bottom != 0.0 {
        return false;
    }
    if !tool_bar_hidden && nav.tool_bar_style_or_default() != BarStyle::Stack {
        return false;
    }
    (tool_bar_bottom - (window_height - safe_area.bottom)).abs() <= EDGE_EPSILON
}

/// Extents by which content reaches under each edge's inset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SafeAreaOverlap {
    pub top: f32,
    pub bottom: f32,
}

impl SafeAreaOverlap {
    pub const NONE: Self = Self {
        top: 0.0,
        bottom: 0.0,
    };

    /// Resolves both edges against the current insets. Each edge is matched
    /// against the combined inset of the requested types.
    pub fn resolve(
        nav: &LayoutProperty,
        edges: &EdgePositions,
        safe_area: &dyn SafeAreaProvider,
    ) -> Self {
        let types = nav
            .ignore_layout_safe_area
            .map(|opts| opts.types)
            .unwrap_or(SafeAreaTypes::SYSTEM);
        let top_insets = safe_area.combined_safe_area(SafeAreaEdges::TOP, types);
        let top = if check_top_edge_overlap(
            nav,
            edges.title_bar_hidden,
            edges.title_bar_top,
            &top_insets,
        ) {
            top_insets.top
        } else {
            0.0
        };
        let bottom_insets = safe_area.combined_safe_area(SafeAreaEdges::BOTTOM, types);
        let bottom = if check_bottom_edge_overlap(
            nav,
            edges.tool_bar_hidden,
            edges.tool_bar_bottom,
            edges.window_height,
            &bottom_insets,
        ) {
            bottom_insets.bottom
        } else {
            0.0
        };
        Self { top, bottom }
    }

    pub fn total(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Where the bars sit, in window coordinates, for one overlap decision.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgePositions {
    pub title_bar_hidden: bool,
    pub title_bar_top: f32,
    pub tool_bar_hidden: bool,
    pub tool_bar_bottom: f32,
    pub window_height: f32,
}

#[cfg(test)]
#[path = "tests/overlap_tests.rs"]
mod tests;
