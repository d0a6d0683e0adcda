//! Navigation theme constants.
//!
//! The theme subsystem hands layout a flat set of named dimensions. Values are
//! density-independent; conversion to pixels happens once, in
//! [`SizingPolicy::resolve`](crate::SizingPolicy::resolve).

use std::cell::RefCell;
use std::fmt;

use rustc_hash::FxHashMap;
use tessel_ui_graphics::Dp;

/// Dimension constants used by the navigation algorithms.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationTheme {
    pub back_button_width: Dp,
    pub back_button_height: Dp,
    pub menu_item_size: Dp,
    pub menu_item_gap: Dp,
    pub toolbar_height: Dp,
    pub toolbar_divider_width: Dp,
    /// Leading padding of the title bar.
    pub max_padding_start: Dp,
    /// Trailing padding of the title bar.
    pub max_padding_end: Dp,
    /// Gap between the back button and the title block.
    pub back_button_title_margin: Dp,
    /// Gap between the title block and the menu.
    pub title_menu_margin: Dp,
    pub title_font_size: Dp,
    pub title_font_size_big: Dp,
    pub subtitle_font_size: Dp,
    pub single_line_title_bar_height: Dp,
    pub full_single_line_title_bar_height: Dp,
    pub full_double_line_title_bar_height: Dp,
    pub title_subtitle_gap: Dp,
    pub toolbar_rotation_limit_grid_count: u32,
    pub max_menu_items_small: u32,
    pub max_menu_items_large: u32,
    /// Header width from which the large menu cap applies.
    pub menu_large_width_threshold: Dp,
    pub toolbar_max_items: u32,
}

impl Default for NavigationTheme {
    fn default() -> Self {
        Self {
            back_button_width: Dp(40.0),
            back_button_height: Dp(40.0),
            menu_item_size: Dp(40.0),
            menu_item_gap: Dp(8.0),
            toolbar_height: Dp(56.0),
            toolbar_divider_width: Dp(1.0),
            max_padding_start: Dp(16.0),
            max_padding_end: Dp(16.0),
            back_button_title_margin: Dp(8.0),
            title_menu_margin: Dp(8.0),
            title_font_size: Dp(20.0),
            title_font_size_big: Dp(30.0),
            subtitle_font_size: Dp(14.0),
            single_line_title_bar_height: Dp(56.0),
            full_single_line_title_bar_height: Dp(112.0),
            full_double_line_title_bar_height: Dp(138.0),
            title_subtitle_gap: Dp(2.0),
            toolbar_rotation_limit_grid_count: 8,
            max_menu_items_small: 3,
            max_menu_items_large: 5,
            menu_large_width_threshold: Dp(600.0),
            toolbar_max_items: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    InvalidValue { key: String, value: f32 },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::InvalidValue { key, value } => {
                write!(f, "theme key {key} has invalid value {value}")
            }
        }
    }
}

impl std::error::Error for ThemeError {}

impl NavigationTheme {
    /// Builds a theme from recognized keys, starting from the defaults.
    ///
    /// Unknown keys are ignored. Negative or non-finite values are rejected.
    pub fn from_entries(entries: &FxHashMap<String, f32>) -> Result<Self, ThemeError> {
        let mut theme = Self::default();
        for (key, value) in entries {
            let value = *value;
            if !value.is_finite() || value < 0.0 {
                return Err(ThemeError::InvalidValue {
                    key: key.clone(),
                    value,
                });
            }
            let dp = Dp(value);
            let count = value.round() as u32;
            match key.as_str() {
                "backButtonWidth" => theme.back_button_width = dp,
                "backButtonHeight" => theme.back_button_height = dp,
                "menuItemSize" => theme.menu_item_size = dp,
                "menuItemGap" => theme.menu_item_gap = dp,
                "toolbarHeight" => theme.toolbar_height = dp,
                "toolbarDividerWidth" => theme.toolbar_divider_width = dp,
                "maxPaddingStart" => theme.max_padding_start = dp,
                "maxPaddingEnd" => theme.max_padding_end = dp,
                "backButtonTitleMargin" => theme.back_button_title_margin = dp,
                "titleMenuMargin" => theme.title_menu_margin = dp,
                "titleFontSize" => theme.title_font_size = dp,
                "titleFontSizeBig" => theme.title_font_size_big = dp,
                "subtitleFontSize" => theme.subtitle_font_size = dp,
                "singleLineTitleBarHeight" => theme.single_line_title_bar_height = dp,
                "fullSingleLineTitleBarHeight" => theme.full_single_line_title_bar_height = dp,
                "fullDoubleLineTitleBarHeight" => theme.full_double_line_title_bar_height = dp,
                "titleSubtitleGap" => theme.title_subtitle_gap = dp,
                "toolbarRotationLimitGridCount" => theme.toolbar_rotation_limit_grid_count = count,
                "maxMenuItemsSmall" => theme.max_menu_items_small = count,
                "maxMenuItemsLarge" => theme.max_menu_items_large = count,
                "menuLargeWidthThreshold" => theme.menu_large_width_threshold = dp,
                "toolbarMaxItems" => theme.toolbar_max_items = count,
                other => log::debug!("ignoring unknown navigation theme key {other}"),
            }
        }
        Ok(theme)
    }
}

/// Source of the navigation theme.
///
/// `None` means the theme is unavailable; algorithms then abort the affected
/// sub-measurement with a zero-sized result.
pub trait ThemeProvider {
    fn navigation_theme(&self) -> Option<NavigationTheme>;
}

impl ThemeProvider for NavigationTheme {
    fn navigation_theme(&self) -> Option<NavigationTheme> {
        Some(self.clone())
    }
}

/// Theme slot that can be filled, swapped or cleared at runtime.
#[derive(Debug, Default)]
pub struct SharedTheme {
    theme: RefCell<Option<NavigationTheme>>,
}

impl SharedTheme {
    pub fn new(theme: Option<NavigationTheme>) -> Self {
        Self {
            theme: RefCell::new(theme),
        }
    }

    pub fn set(&self, theme: Option<NavigationTheme>) {
        *self.theme.borrow_mut() = theme;
    }
}

impl ThemeProvider for SharedTheme {
    fn navigation_theme(&self) -> Option<NavigationTheme> {
        self.theme.borrow().clone()
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
