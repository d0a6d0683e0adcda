//! Pixel constants for one measure pass.
//!
//! Two parallel constant sets exist: the legacy one used by applications that
//! target an API version below [`THEME_DRIVEN_API_VERSION`], and the
//! theme-driven one. The set is picked once per measure and every formula
//! reads from the resolved [`SizingPolicy`].

use tessel_ui_graphics::Dp;
use tessel_ui_layout::{LayoutWrapper, TitleMode, THEME_DRIVEN_API_VERSION};

use crate::theme::{NavigationTheme, ThemeProvider};

/// Share of the header height a subtitle may occupy.
pub const SUBTITLE_HEIGHT_RATIO: f32 = 0.35;

const LEGACY_BACK_BUTTON_SIZE: Dp = Dp(24.0);
const LEGACY_PADDING: Dp = Dp(24.0);
const LEGACY_BACK_BUTTON_MARGIN: Dp = Dp(16.0);
const LEGACY_MENU_ITEM_SIZE: Dp = Dp(24.0);
const LEGACY_MENU_ITEM_GAP: Dp = Dp(24.0);
const LEGACY_TITLE_MENU_MARGIN: Dp = Dp(16.0);
const LEGACY_SINGLE_LINE_HEIGHT: Dp = Dp(56.0);
const LEGACY_FULL_SINGLE_LINE_HEIGHT: Dp = Dp(112.0);
const LEGACY_FULL_DOUBLE_LINE_HEIGHT: Dp = Dp(138.0);
const LEGACY_TITLE_SUBTITLE_GAP: Dp = Dp(2.0);
const LEGACY_VERTICAL_PADDING: Dp = Dp(8.0);
const LEGACY_TOOLBAR_HEIGHT: Dp = Dp(56.0);
const LEGACY_DIVIDER_WIDTH: Dp = Dp(1.0);
const LEGACY_TITLE_FONT_SIZE: Dp = Dp(24.0);
const LEGACY_SUBTITLE_FONT_SIZE: Dp = Dp(14.0);
const LEGACY_MENU_LARGE_WIDTH_THRESHOLD: Dp = Dp(600.0);
const LEGACY_ROTATION_LIMIT_GRID_COUNT: u32 = 8;
const LEGACY_MAX_MENU_ITEMS: u32 = 3;
const LEGACY_TOOLBAR_MAX_ITEMS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizingGeneration {
    /// Pre-theme constants; the header grows with its content.
    Legacy,
    /// Theme-driven constants; header heights are fixed per mode.
    ThemeDriven,
}

/// Resolved, pixel-rounded sizing constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizingPolicy {
    pub generation: SizingGeneration,
    pub back_button_width: f32,
    pub back_button_height: f32,
    pub padding_start: f32,
    pub padding_end: f32,
    pub back_button_margin: f32,
    pub title_menu_margin: f32,
    pub menu_item_size: f32,
    pub menu_item_gap: f32,
    pub max_menu_items_small: u32,
    pub max_menu_items_large: u32,
    pub menu_large_width_threshold: f32,
    pub single_line_height: f32,
    pub full_single_line_height: f32,
    pub full_double_line_height: f32,
    pub title_subtitle_gap: f32,
    /// Top and bottom padding of a content-derived legacy header.
    pub vertical_padding: f32,
    pub title_font_size: f32,
    pub title_font_size_big: f32,
    pub subtitle_font_size: f32,
    pub toolbar_height: f32,
    pub toolbar_divider_width: f32,
    pub toolbar_max_items: u32,
    pub rotation_limit_grid_count: u32,
}

impl SizingPolicy {
    /// Picks the constant set for `api_version`.
    ///
    /// The legacy set needs no theme. The theme-driven set returns `None` when
    /// `theme` is unavailable.
    pub fn resolve(
        api_version: u32,
        theme: Option<&NavigationTheme>,
        density: f32,
    ) -> Option<Self> {
        if api_version < THEME_DRIVEN_API_VERSION {
            return Some(Self::legacy(density));
        }
        theme.map(|theme| Self::theme_driven(theme, density))
    }

    /// Resolves the policy for the node `wrapper` is measuring.
    pub fn for_wrapper(wrapper: &LayoutWrapper<'_>, theme: &dyn ThemeProvider) -> Option<Self> {
        let api_version = wrapper.api_target_version();
        let density = wrapper.env().display.density;
        let theme = theme.navigation_theme();
        let policy = Self::resolve(api_version, theme.as_ref(), density);
        if policy.is_none() {
            log::warn!(
                "navigation theme unavailable, node {} measured at zero size",
                wrapper.node_id()
            );
        }
        policy
    }

    pub fn legacy(density: f32) -> Self {
        let px = |dp: Dp| dp.round_to_px(density);
        Self {
            generation: SizingGeneration::Legacy,
            back_button_width: px(LEGACY_BACK_BUTTON_SIZE),
            back_button_height: px(LEGACY_BACK_BUTTON_SIZE),
            padding_start: px(LEGACY_PADDING),
            padding_end: px(LEGACY_PADDING),
            back_button_margin: px(LEGACY_BACK_BUTTON_MARGIN),
            title_menu_margin: px(LEGACY_TITLE_MENU_MARGIN),
            menu_item_size: px(LEGACY_MENU_ITEM_SIZE),
            menu_item_gap: px(LEGACY_MENU_ITEM_GAP),
            max_menu_items_small: LEGACY_MAX_MENU_ITEMS,
            max_menu_items_large: LEGACY_MAX_MENU_ITEMS,
            menu_large_width_threshold: px(LEGACY_MENU_LARGE_WIDTH_THRESHOLD),
            single_line_height: px(LEGACY_SINGLE_LINE_HEIGHT),
            full_single_line_height: px(LEGACY_FULL_SINGLE_LINE_HEIGHT),
            full_double_line_height: px(LEGACY_FULL_DOUBLE_LINE_HEIGHT),
            title_subtitle_gap: px(LEGACY_TITLE_SUBTITLE_GAP),
            vertical_padding: px(LEGACY_VERTICAL_PADDING),
            title_font_size: px(LEGACY_TITLE_FONT_SIZE),
            title_font_size_big: px(LEGACY_TITLE_FONT_SIZE),
            subtitle_font_size: px(LEGACY_SUBTITLE_FONT_SIZE),
            toolbar_height: px(LEGACY_TOOLBAR_HEIGHT),
            toolbar_divider_width: px(LEGACY_DIVIDER_WIDTH),
            toolbar_max_items: LEGACY_TOOLBAR_MAX_ITEMS,
            rotation_limit_grid_count: LEGACY_ROTATION_LIMIT_GRID_COUNT,
        }
    }

    pub fn theme_driven(theme: &NavigationTheme, density: f32) -> Self {
        let px = |dp: Dp| dp.round_to_px(density);
        Self {
            generation: SizingGeneration::ThemeDriven,
            back_button_width: px(theme.back_button_width),
            back_button_height: px(theme.back_button_height),
            padding_start: px(theme.max_padding_start),
            padding_end: px(theme.max_padding_end),
            back_button_margin: px(theme.back_button_title_margin),
            title_menu_margin: px(theme.title_menu_margin),
            menu_item_size: px(theme.menu_item_size),
            menu_item_gap: px(theme.menu_item_gap),
            max_menu_items_small: theme.max_menu_items_small,
            max_menu_items_large: theme.max_menu_items_large,
            menu_large_width_threshold: px(theme.menu_large_width_threshold),
            single_line_height: px(theme.single_line_title_bar_height),
            full_single_line_height: px(theme.full_single_line_title_bar_height),
            full_double_line_height: px(theme.full_double_line_title_bar_height),
            title_subtitle_gap: px(theme.title_subtitle_gap),
            vertical_padding: 0.0,
            title_font_size: px(theme.title_font_size),
            title_font_size_big: px(theme.title_font_size_big),
            subtitle_font_size: px(theme.subtitle_font_size),
            toolbar_height: px(theme.toolbar_height),
            toolbar_divider_width: px(theme.toolbar_divider_width),
            toolbar_max_items: theme.toolbar_max_items,
            rotation_limit_grid_count: theme.toolbar_rotation_limit_grid_count,
        }
    }

    pub fn is_legacy(&self) -> bool {
        self.generation == SizingGeneration::Legacy
    }

    /// Height of the expanded header.
    pub fn full_height(&self, has_subtitle: bool) -> f32 {
        if has_subtitle {
            self.full_double_line_height
        } else {
            self.full_single_line_height
        }
    }

    /// Fixed header height for `mode`. FREE reports the expanded height; the
    /// scroll coordinator moves it between the single-line and full heights.
    pub fn header_height(&self, mode: TitleMode, has_subtitle: bool) -> f32 {
        match mode {
            TitleMode::Mini => self.single_line_height,
            TitleMode::Full | TitleMode::Free => self.full_height(has_subtitle),
        }
    }

    /// Cap on framework menu items for a header of `header_width`.
    pub fn max_menu_items(&self, header_width: f32) -> usize {
        if header_width >= self.menu_large_width_threshold {
            self.max_menu_items_large as usize
        } else {
            self.max_menu_items_small as usize
        }
    }

    /// Width of a framework menu showing `visible_items` items.
    pub fn menu_width(&self, visible_items: usize) -> f32 {
        if visible_items == 0 {
            return 0.0;
        }
        let count = visible_items as f32;
        self.menu_item_size * count + self.menu_item_gap * (count - 1.0)
    }

    /// Number of menu slots actually shown for `item_count` items.
    pub fn visible_menu_items(&self, item_count: usize, header_width: f32) -> usize {
        item_count.min(self.max_menu_items(header_width))
    }

    pub fn title_font_size_for(&self, mode: TitleMode) -> f32 {
        match mode {
            TitleMode::Mini => self.title_font_size,
            TitleMode::Full | TitleMode::Free => self.title_font_size_big,
        }
    }
}

#[cfg(test)]
#[path = "tests/sizing_policy_tests.rs"]
mod tests;
