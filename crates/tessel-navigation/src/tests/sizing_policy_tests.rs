use super::*;

#[test]
fn legacy_constants_below_theme_driven_api() {
    let policy = SizingPolicy::resolve(THEME_DRIVEN_API_VERSION - 1, None, 1.0).unwrap();
    assert!(policy.is_legacy());
    assert_eq!(policy.back_button_width, 24.0);
    assert_eq!(policy.single_line_height, 56.0);
    assert_eq!(policy.vertical_padding, 8.0);
}

#[test]
fn legacy_path_ignores_the_theme() {
    let mut theme = NavigationTheme::default();
    theme.back_button_width = Dp(99.0);
    let policy = SizingPolicy::resolve(9, Some(&theme), 1.0).unwrap();
    assert_eq!(policy.back_button_width, 24.0);
}

#[test]
fn theme_driven_path_reads_the_theme() {
    let policy =
        SizingPolicy::resolve(THEME_DRIVEN_API_VERSION, Some(&NavigationTheme::default()), 1.0)
            .unwrap();
    assert!(!policy.is_legacy());
    assert_eq!(policy.back_button_width, 40.0);
    assert_eq!(policy.menu_item_gap, 8.0);
    assert_eq!(policy.vertical_padding, 0.0);
}

#[test]
fn theme_driven_path_without_theme_is_none() {
    assert!(SizingPolicy::resolve(12, None, 1.0).is_none());
}

#[test]
fn dp_values_are_rounded_once_per_density() {
    let mut theme = NavigationTheme::default();
    theme.back_button_width = Dp(10.25);
    theme.menu_item_gap = Dp(3.0);
    let policy = SizingPolicy::theme_driven(&theme, 2.0);
    // 20.5 rounds half away from zero.
    assert_eq!(policy.back_button_width, 21.0);
    assert_eq!(policy.menu_item_gap, 6.0);

    let policy = SizingPolicy::theme_driven(&theme, 1.5);
    assert_eq!(policy.menu_item_gap, 5.0);
    assert_eq!(policy.single_line_height, 84.0);
}

#[test]
fn header_height_per_mode() {
    let policy = SizingPolicy::theme_driven(&NavigationTheme::default(), 1.0);
    assert_eq!(policy.header_height(TitleMode::Mini, false), 56.0);
    assert_eq!(policy.header_height(TitleMode::Mini, true), 56.0);
    assert_eq!(policy.header_height(TitleMode::Full, false), 112.0);
    assert_eq!(policy.header_height(TitleMode::Full, true), 138.0);
    assert_eq!(policy.header_height(TitleMode::Free, true), 138.0);
}

#[test]
fn menu_cap_switches_at_width_threshold() {
    let policy = SizingPolicy::theme_driven(&NavigationTheme::default(), 1.0);
    assert_eq!(policy.max_menu_items(599.0), 3);
    assert_eq!(policy.max_menu_items(600.0), 5);
    assert_eq!(policy.visible_menu_items(8, 400.0), 3);
    assert_eq!(policy.visible_menu_items(2, 400.0), 2);
}

#[test]
fn menu_width_counts_gaps_between_items() {
    let policy = SizingPolicy::theme_driven(&NavigationTheme::default(), 1.0);
    assert_eq!(policy.menu_width(0), 0.0);
    assert_eq!(policy.menu_width(1), 40.0);
    assert_eq!(policy.menu_width(3), 136.0);
}

#[test]
fn title_font_grows_outside_mini() {
    let policy = SizingPolicy::theme_driven(&NavigationTheme::default(), 1.0);
    assert_eq!(policy.title_font_size_for(TitleMode::Mini), 20.0);
    assert_eq!(policy.title_font_size_for(TitleMode::Full), 30.0);
    assert_eq!(policy.title_font_size_for(TitleMode::Free), 30.0);
}
