use super::*;
use crate::factory::NavigationAlgorithmFactory;
use crate::theme::{NavigationTheme, SharedTheme};
use tessel_testing::{NavTree, NavTreeBuilder, TestEnv};
use tessel_ui_graphics::Rect;
use tessel_ui_layout::{
    BarStyle, DeviceType, OptionalSize, SafeAreaEdges, SafeAreaExpandOpts, SafeAreaInsets,
    SafeAreaTypes, TitleMode,
};

fn factory() -> NavigationAlgorithmFactory {
    NavigationAlgorithmFactory::new(Rc::new(NavigationTheme::default()))
}

fn run(builder: NavTreeBuilder, env: &TestEnv) -> NavTree {
    let mut nav = builder.build(&factory());
    nav.run(&env.env);
    nav
}

fn ignore_system(edges: SafeAreaEdges) -> impl FnOnce(&mut LayoutProperty) {
    move |property| {
        property.ignore_layout_safe_area =
            Some(SafeAreaExpandOpts::new(SafeAreaTypes::SYSTEM, edges));
    }
}

fn full_width(y: f32, height: f32) -> Rect {
    Rect::from_origin_size(Point::new(0.0, y), Size::new(360.0, height))
}

#[test]
fn regions_stack_top_to_bottom() {
    let nav = run(NavTreeBuilder::new().tool_bar_items(3), &TestEnv::phone());

    assert_eq!(nav.size(nav.nav_bar), Size::new(360.0, 780.0));
    assert_eq!(nav.frame(nav.title_bar.unwrap()), full_width(0.0, 112.0));
    assert_eq!(nav.frame(nav.content.unwrap()), full_width(112.0, 611.0));
    assert_eq!(nav.frame(nav.divider.unwrap()), full_width(723.0, 1.0));
    assert_eq!(nav.frame(nav.tool_bar.unwrap()), full_width(724.0, 56.0));
}

#[test]
fn frame_height_is_the_sum_of_its_regions() {
    for mode in [TitleMode::Mini, TitleMode::Full, TitleMode::Free] {
        for with_title_bar in [true, false] {
            for tool_bar_items in [0, 3, 7] {
                for hide_tool_bar in [false, true] {
                    let mut builder = NavTreeBuilder::new()
                        .nav_bar(|property| {
                            property.title_mode = Some(mode);
                            property.hide_tool_bar = Some(hide_tool_bar);
                        })
                        .tool_bar_items(tool_bar_items);
                    if !with_title_bar {
                        builder = builder.without_title_bar();
                    }
                    let nav = run(builder, &TestEnv::phone());

                    let sum = nav.height(nav.title_bar)
                        + nav.height(nav.content)
                        + nav.height(nav.divider)
                        + nav.height(nav.tool_bar);
                    let height = nav.size(nav.nav_bar).height;
                    let case = (mode, with_title_bar, tool_bar_items, hide_tool_bar);
                    assert_eq!(height, sum, "{case:?}");
                    assert_eq!(height, 780.0);
                }
            }
        }
    }
}

#[test]
fn toolbar_auto_hides_on_wide_phone_grid() {
    let env = TestEnv::phone().window(DeviceType::Phone, Size::new(800.0, 780.0), 8);
    let nav = run(NavTreeBuilder::new().tool_bar_items(3), &env);

    assert_eq!(nav.height(nav.tool_bar), 0.0);
    assert_eq!(nav.height(nav.divider), 0.0);
    assert_eq!(nav.height(nav.content), 780.0 - 112.0);
}

#[test]
fn hidden_toolbar_takes_no_space() {
    let builder = NavTreeBuilder::new()
        .nav_bar(|property| property.hide_tool_bar = Some(true))
        .tool_bar_items(3);
    let nav = run(builder, &TestEnv::phone());
    assert_eq!(nav.size(nav.tool_bar.unwrap()), Size::ZERO);
    assert_eq!(nav.size(nav.divider.unwrap()), Size::ZERO);
    assert_eq!(nav.height(nav.content), 668.0);
}

#[test]
fn hidden_title_bar_gives_content_the_top() {
    let builder = NavTreeBuilder::new().nav_bar(|property| property.hide_title_bar = Some(true));
    let nav = run(builder, &TestEnv::phone());
    assert_eq!(nav.size(nav.title_bar.unwrap()), Size::ZERO);
    assert_eq!(nav.frame(nav.content.unwrap()), full_width(0.0, 780.0));
}

#[test]
fn missing_content_aborts_with_zero_frame() {
    let nav = run(
        NavTreeBuilder::new().without_content().tool_bar_items(2),
        &TestEnv::phone(),
    );
    assert_eq!(nav.size(nav.nav_bar), Size::ZERO);
    assert_eq!(nav.size(nav.title_bar.unwrap()), Size::ZERO);
    assert_eq!(nav.size(nav.tool_bar.unwrap()), Size::ZERO);
}

/// Runs a nav bar placed at `top` inside the window with the given height.
fn run_at(builder: NavTreeBuilder, env: &TestEnv, top: f32, height: f32) -> NavTree {
    let mut nav = builder.build(&factory());
    nav.place_at(Point::new(0.0, top));
    nav.run_with(LayoutConstraint::tight(Size::new(360.0, height)), &env.env);
    nav
}

#[test]
fn content_extends_under_top_inset_when_allowed() {
    let env = TestEnv::phone().system_insets(SafeAreaInsets::new(24.0, 0.0, 0.0, 0.0));
    let builder = NavTreeBuilder::new().nav_bar(|property| {
        ignore_system(SafeAreaEdges::TOP)(property);
        property.hide_title_bar = Some(true);
    });
    let nav = run_at(builder, &env, 24.0, 756.0);

    assert_eq!(nav.size(nav.nav_bar).height, 756.0);
    assert_eq!(nav.frame(nav.content.unwrap()), full_width(-24.0, 780.0));
    assert_eq!(nav.global_frame(nav.content.unwrap()), full_width(0.0, 780.0));
}

#[test]
fn nav_bar_covering_the_insets_keeps_content_in_the_window() {
    let env = TestEnv::phone().system_insets(SafeAreaInsets::new(24.0, 30.0, 0.0, 0.0));
    let builder = NavTreeBuilder::new().nav_bar(|property| {
        ignore_system(SafeAreaEdges::VERTICAL)(property);
        property.hide_title_bar = Some(true);
    });
    let nav = run(builder, &env);

    let content = nav.global_frame(nav.content.unwrap());
    assert_eq!(content, full_width(0.0, 780.0));
    assert!(content.y >= 0.0);
    assert!(content.y + content.height <= 780.0);
}

#[test]
fn stacked_title_bar_lets_content_slide_under_it() {
    let env = TestEnv::phone().system_insets(SafeAreaInsets::new(24.0, 0.0, 0.0, 0.0));
    let builder = NavTreeBuilder::new().nav_bar(|property| {
        ignore_system(SafeAreaEdges::TOP)(property);
        property.title_bar_style = Some(BarStyle::Stack);
    });
    let nav = run_at(builder, &env, 24.0, 756.0);
    assert_eq!(nav.frame(nav.content.unwrap()), full_width(112.0 - 24.0, 644.0 + 24.0));
}

#[test]
fn standard_title_bar_keeps_content_below_it() {
    let env = TestEnv::phone().system_insets(SafeAreaInsets::new(24.0, 0.0, 0.0, 0.0));
    let builder = NavTreeBuilder::new().nav_bar(ignore_system(SafeAreaEdges::TOP));
    let nav = run_at(builder, &env, 24.0, 756.0);
    assert_eq!(nav.frame(nav.content.unwrap()), full_width(112.0, 644.0));
}

#[test]
fn content_extends_under_bottom_inset_without_toolbar() {
    let env = TestEnv::phone().system_insets(SafeAreaInsets::new(0.0, 30.0, 0.0, 0.0));
    let builder = NavTreeBuilder::new().nav_bar(ignore_system(SafeAreaEdges::BOTTOM));
    let nav = run_at(builder, &env, 0.0, 750.0);

    assert_eq!(nav.frame(nav.content.unwrap()), full_width(112.0, 638.0 + 30.0));
    assert_eq!(nav.size(nav.nav_bar).height, 750.0);
    let content = nav.global_frame(nav.content.unwrap());
    assert_eq!(content.y + content.height, 780.0);
}

#[test]
fn padding_blocks_overlap() {
    let env = TestEnv::phone().system_insets(SafeAreaInsets::new(24.0, 0.0, 0.0, 0.0));
    let builder = NavTreeBuilder::new().nav_bar(|property| {
        ignore_system(SafeAreaEdges::TOP)(property);
        property.hide_title_bar = Some(true);
        property.padding.top = 8.0;
    });
    let nav = run_at(builder, &env, 24.0, 756.0);
    assert_eq!(nav.frame(nav.content.unwrap()), full_width(0.0, 756.0));
}

#[test]
fn insets_changing_before_layout_trigger_one_remeasure() {
    let env = TestEnv::phone();
    let builder = NavTreeBuilder::new().nav_bar(|property| {
        ignore_system(SafeAreaEdges::TOP)(property);
        property.hide_title_bar = Some(true);
    });
    let mut nav = builder.build(&factory());
    nav.place_at(Point::new(0.0, 24.0));

    nav.measure(LayoutConstraint::tight(Size::new(360.0, 756.0)), &env.env);
    assert_eq!(nav.height(nav.content), 756.0);

    env.safe_area.set_system(SafeAreaInsets::new(24.0, 0.0, 0.0, 0.0));
    nav.layout(&env.env);

    assert_eq!(nav.frame(nav.content.unwrap()), full_width(-24.0, 780.0));
    assert_eq!(nav.size(nav.nav_bar).height, 756.0);
}

#[test]
fn keyboard_offset_lifts_content() {
    let factory = factory();
    factory.keyboard_avoidance().set_offset(100.0);
    let mut nav = NavTreeBuilder::new().build(&factory);
    nav.run(&TestEnv::phone().env);
    assert_eq!(nav.frame(nav.content.unwrap()).y, 12.0);

    factory.keyboard_avoidance().set_offset(0.0);
    nav.run(&TestEnv::phone().env);
    assert_eq!(nav.frame(nav.content.unwrap()).y, 112.0);
}

#[test]
fn unbounded_height_wraps_content() {
    let builder = NavTreeBuilder::new()
        .content(|property| property.user_size = OptionalSize::new(None, Some(200.0)));
    let mut nav = builder.build(&factory());
    nav.run_with(
        LayoutConstraint::loose(Size::new(360.0, f32::INFINITY)),
        &TestEnv::phone().env,
    );
    assert_eq!(nav.size(nav.nav_bar), Size::new(360.0, 312.0));
    assert_eq!(nav.frame(nav.content.unwrap()), full_width(112.0, 200.0));
}

#[test]
fn bars_taller_than_the_frame_leave_content_empty() {
    let mut nav = NavTreeBuilder::new().tool_bar_items(3).build(&factory());
    nav.run_with(
        LayoutConstraint::tight(Size::new(360.0, 100.0)),
        &TestEnv::phone().env,
    );
    assert_eq!(nav.height(nav.content), 0.0);
    let sum = nav.height(nav.title_bar) + nav.height(nav.divider) + nav.height(nav.tool_bar);
    assert_eq!(nav.size(nav.nav_bar).height, sum);
}

#[test]
fn missing_theme_keeps_only_content() {
    let theme = Rc::new(SharedTheme::new(None));
    let factory = NavigationAlgorithmFactory::new(theme.clone());
    let mut nav = NavTreeBuilder::new().tool_bar_items(3).build(&factory);
    let env = TestEnv::phone();
    nav.run(&env.env);

    assert_eq!(nav.height(nav.title_bar), 0.0);
    assert_eq!(nav.height(nav.tool_bar), 0.0);
    assert_eq!(nav.height(nav.divider), 0.0);
    assert_eq!(nav.frame(nav.content.unwrap()), full_width(0.0, 780.0));

    theme.set(Some(NavigationTheme::default()));
    nav.run(&env.env);
    assert_eq!(nav.frame(nav.content.unwrap()), full_width(112.0, 611.0));
}

#[test]
fn rtl_keeps_full_width_regions_flush() {
    let env = TestEnv::phone().rtl();
    let nav = run(NavTreeBuilder::new().tool_bar_items(3), &env);
    for id in [nav.title_bar, nav.content, nav.divider, nav.tool_bar] {
        assert_eq!(nav.frame(id.unwrap()).x, 0.0);
    }
}

#[test]
fn repeated_measure_is_idempotent() {
    let mut nav = NavTreeBuilder::new()
        .subtitle("Subtitle")
        .menu_items(2)
        .tool_bar_items(4)
        .build(&factory());
    let env = TestEnv::phone();
    let nodes = [nav.nav_bar, nav.title_bar.unwrap(), nav.content.unwrap(), nav.tool_bar.unwrap()];

    nav.run(&env.env);
    let first: Vec<Rect> = nodes.iter().map(|id| nav.frame(*id)).collect();
    nav.run(&env.env);
    let second: Vec<Rect> = nodes.iter().map(|id| nav.frame(*id)).collect();
    assert_eq!(first, second);
}
