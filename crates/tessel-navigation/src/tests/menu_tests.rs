use super::*;
use crate::factory::NavigationAlgorithmFactory;
use crate::theme::NavigationTheme;
use tessel_testing::{NavTree, NavTreeBuilder, TestEnv};
use tessel_ui_layout::DeviceType;

fn factory() -> NavigationAlgorithmFactory {
    NavigationAlgorithmFactory::new(Rc::new(NavigationTheme::default()))
}

fn env(width: f32) -> TestEnv {
    TestEnv::phone().window(DeviceType::Phone, Size::new(width, 800.0), 4)
}

fn run(builder: NavTreeBuilder, env: &TestEnv) -> NavTree {
    let mut nav = builder.build(&factory());
    nav.run(&env.env);
    nav
}

#[test]
fn overflow_slot_without_overflow_is_identity() {
    for index in 0..3 {
        assert_eq!(overflow_slot(index, 3, 3), Some(index));
    }
    assert_eq!(overflow_slot(3, 3, 3), None);
}

#[test]
fn overflow_slot_gives_last_slot_to_the_last_child() {
    let slots: Vec<_> = (0..6).map(|index| overflow_slot(index, 6, 3)).collect();
    assert_eq!(slots, vec![Some(0), Some(1), None, None, None, Some(2)]);
}

#[test]
fn overflow_slot_with_zero_cap_hides_everything() {
    assert_eq!(overflow_slot(0, 2, 0), None);
    assert_eq!(overflow_slot(1, 2, 0), None);
}

#[test]
fn narrow_header_caps_menu_at_three_items() {
    let nav = run(NavTreeBuilder::new().menu_items(5), &env(400.0));
    let menu = nav.menu.unwrap();

    assert_eq!(nav.size(menu), Size::new(136.0, 40.0));
    assert_eq!(nav.frame(nav.menu_items[0]).origin(), Point::new(0.0, 0.0));
    assert_eq!(nav.frame(nav.menu_items[1]).origin(), Point::new(48.0, 0.0));
    assert_eq!(nav.size(nav.menu_items[2]), Size::ZERO);
    assert_eq!(nav.size(nav.menu_items[3]), Size::ZERO);
    // The last child is the overflow entry.
    assert_eq!(nav.frame(nav.menu_items[4]).origin(), Point::new(96.0, 0.0));
    assert_eq!(nav.size(nav.menu_items[4]), Size::square(40.0));
}

#[test]
fn wide_header_allows_five_items() {
    let nav = run(NavTreeBuilder::new().menu_items(5), &env(600.0));
    assert_eq!(nav.size(nav.menu.unwrap()).width, 232.0);
    for item in &nav.menu_items {
        assert_eq!(nav.size(*item), Size::square(40.0));
    }

    let nav = run(NavTreeBuilder::new().menu_items(7), &env(640.0));
    assert_eq!(nav.size(nav.menu.unwrap()).width, 232.0);
    assert_eq!(nav.size(nav.menu_items[4]), Size::ZERO);
    assert_eq!(nav.size(nav.menu_items[5]), Size::ZERO);
    assert_eq!(nav.frame(nav.menu_items[6]).x, 4.0 * 48.0);
}

#[test]
fn menu_sits_at_trailing_padding_of_the_single_line_slot() {
    let nav = run(NavTreeBuilder::new().menu_items(5), &env(400.0));
    let frame = nav.frame(nav.menu.unwrap());
    assert_eq!(frame.origin(), Point::new(400.0 - 16.0 - 136.0, 8.0));
}

#[test]
fn rtl_mirrors_item_slots() {
    let env = env(400.0).rtl();
    let nav = run(NavTreeBuilder::new().menu_items(5), &env);

    assert_eq!(nav.frame(nav.menu.unwrap()).x, 16.0);
    assert_eq!(nav.frame(nav.menu_items[0]).x, 96.0);
    assert_eq!(nav.frame(nav.menu_items[1]).x, 48.0);
    assert_eq!(nav.frame(nav.menu_items[4]).x, 0.0);
}

#[test]
fn custom_menu_keeps_its_natural_size() {
    let nav = run(
        NavTreeBuilder::new().custom_menu(Size::new(90.0, 30.0)),
        &env(400.0),
    );
    let frame = nav.frame(nav.menu.unwrap());
    assert_eq!(frame.size(), Size::new(90.0, 30.0));
    assert_eq!(frame.origin(), Point::new(400.0 - 16.0 - 90.0, 13.0));
}
