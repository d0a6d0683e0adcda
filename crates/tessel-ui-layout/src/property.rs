//! Declarative per-node configuration read by layout algorithms.

use crate::constraint::{LayoutConstraint, OptionalSize};
use crate::safe_area::SafeAreaExpandOpts;
use tessel_ui_graphics::EdgeInsets;

/// Sizing policy of a title bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TitleMode {
    /// Single-line header.
    Mini,
    /// Expanded header with a fixed height.
    Full,
    /// Height follows coordinated scrolling between the mini and full heights.
    #[default]
    Free,
}

/// Background style of a title bar or toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BarStyle {
    #[default]
    Standard,
    /// Content is drawn behind a transparent bar.
    Stack,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Visible,
    /// Takes space but is not drawn.
    Invisible,
    /// Takes no space.
    Gone,
}

/// Layout-relevant properties of one node.
///
/// Optional fields keep "unset" apart from an explicit `false`/zero: an unset
/// field lets the algorithm pick its default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutProperty {
    pub padding: EdgeInsets,
    pub margin: EdgeInsets,
    pub border_width: EdgeInsets,
    /// Explicit width/height requested by the application.
    pub user_size: OptionalSize,
    pub visibility: Visibility,
    /// Constraint handed down by the parent for the current pass.
    pub layout_constraint: Option<LayoutConstraint>,

    pub title_height: Option<f32>,
    pub title_mode: Option<TitleMode>,
    pub hide_title_bar: Option<bool>,
    pub hide_tool_bar: Option<bool>,
    pub hide_back_button: Option<bool>,
    pub title_bar_style: Option<BarStyle>,
    pub tool_bar_style: Option<BarStyle>,
    pub ignore_layout_safe_area: Option<SafeAreaExpandOpts>,
    /// Overrides the display's API target version for this subtree.
    pub api_target_version: Option<u32>,
    /// Set when the subtree was provided by the application rather than
    /// generated by the framework (custom menu, custom toolbar).
    pub is_custom: Option<bool>,

    pub text: Option<String>,
    pub font_size: Option<f32>,
}

impl LayoutProperty {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_margin(mut self, margin: EdgeInsets) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_user_size(mut self, size: OptionalSize) -> Self {
        self.user_size = size;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_title_mode(mut self, mode: TitleMode) -> Self {
        self.title_mode = Some(mode);
        self
    }

    pub fn with_custom(mut self, custom: bool) -> Self {
        self.is_custom = Some(custom);
        self
    }

    /// Padding plus border, the space children never get.
    pub fn padding_and_border(&self) -> EdgeInsets {
        self.padding + self.border_width
    }

    pub fn title_mode_or_default(&self) -> TitleMode {
        self.title_mode.unwrap_or_default()
    }

    pub fn is_title_bar_hidden(&self) -> bool {
        self.hide_title_bar.unwrap_or(false)
    }

    pub fn is_tool_bar_hidden(&self) -> bool {
        self.hide_tool_bar.unwrap_or(false)
    }

    pub fn is_back_button_hidden(&self) -> bool {
        self.hide_back_button.unwrap_or(false)
    }

    pub fn is_custom(&self) -> bool {
        self.is_custom.unwrap_or(false)
    }

    pub fn is_gone(&self) -> bool {
        self.visibility == Visibility::Gone
    }

    pub fn title_bar_style_or_default(&self) -> BarStyle {
        self.title_bar_style.unwrap_or_default()
    }

    pub fn tool_bar_style_or_default(&self) -> BarStyle {
        self.tool_bar_style.unwrap_or_default()
    }
}
