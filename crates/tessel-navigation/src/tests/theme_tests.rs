use super::*;

fn entries(pairs: &[(&str, f32)]) -> FxHashMap<String, f32> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

#[test]
fn empty_entries_yield_defaults() {
    let theme = NavigationTheme::from_entries(&FxHashMap::default()).unwrap();
    assert_eq!(theme, NavigationTheme::default());
}

#[test]
fn recognized_keys_override_defaults() {
    let theme = NavigationTheme::from_entries(&entries(&[
        ("backButtonWidth", 48.0),
        ("toolbarHeight", 64.0),
        ("maxMenuItemsLarge", 6.0),
        ("toolbarRotationLimitGridCount", 12.0),
    ]))
    .unwrap();

    assert_eq!(theme.back_button_width, Dp(48.0));
    assert_eq!(theme.toolbar_height, Dp(64.0));
    assert_eq!(theme.max_menu_items_large, 6);
    assert_eq!(theme.toolbar_rotation_limit_grid_count, 12);
    assert_eq!(theme.back_button_height, NavigationTheme::default().back_button_height);
}

#[test]
fn unknown_keys_are_ignored() {
    let theme = NavigationTheme::from_entries(&entries(&[("sideBarWidth", 240.0)])).unwrap();
    assert_eq!(theme, NavigationTheme::default());
}

#[test]
fn negative_value_is_rejected() {
    let err = NavigationTheme::from_entries(&entries(&[("menuItemGap", -4.0)])).unwrap_err();
    assert_eq!(
        err,
        ThemeError::InvalidValue {
            key: "menuItemGap".to_string(),
            value: -4.0,
        }
    );
    assert!(err.to_string().contains("menuItemGap"));
}

#[test]
fn non_finite_value_is_rejected() {
    let result = NavigationTheme::from_entries(&entries(&[("titleFontSize", f32::NAN)]));
    assert!(matches!(result, Err(ThemeError::InvalidValue { .. })));
}

#[test]
fn shared_theme_can_be_cleared_and_refilled() {
    let shared = SharedTheme::new(Some(NavigationTheme::default()));
    assert!(shared.navigation_theme().is_some());

    shared.set(None);
    assert!(shared.navigation_theme().is_none());

    let mut custom = NavigationTheme::default();
    custom.toolbar_height = Dp(72.0);
    shared.set(Some(custom.clone()));
    assert_eq!(shared.navigation_theme(), Some(custom));
}
