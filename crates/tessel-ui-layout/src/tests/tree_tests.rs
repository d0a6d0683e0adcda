use super::*;
use crate::algorithm::DefaultAlgorithmFactory;
use crate::constraint::OptionalSize;
use crate::direction::TextDirection;
use crate::display::DisplayInfo;
use crate::property::Visibility;
use crate::safe_area::SafeAreaState;
use std::rc::Rc;
use tessel_ui_graphics::EdgeInsets;

fn env(direction: TextDirection) -> LayoutEnv {
    let display = DisplayInfo {
        direction,
        ..DisplayInfo::default()
    };
    LayoutEnv::new(display, Rc::new(SafeAreaState::default()))
}

fn ltr() -> LayoutEnv {
    env(TextDirection::Ltr)
}

fn leaf(tree: &mut LayoutTree, width: f32, height: f32) -> NodeId {
    tree.create_node(
        NodeTag::Generic,
        LayoutProperty::new().with_user_size(OptionalSize::new(Some(width), Some(height))),
        &DefaultAlgorithmFactory,
    )
}

fn padded_root(tree: &mut LayoutTree) -> NodeId {
    tree.create_node(
        NodeTag::Generic,
        LayoutProperty::new().with_padding(EdgeInsets::from_components(10.0, 5.0, 20.0, 5.0)),
        &DefaultAlgorithmFactory,
    )
}

#[test]
fn box_sizes_to_largest_child_plus_padding() {
    let mut tree = LayoutTree::new();
    let root = padded_root(&mut tree);
    let a = leaf(&mut tree, 40.0, 20.0);
    let b = leaf(&mut tree, 60.0, 10.0);
    tree.append_child(root, a).unwrap();
    tree.append_child(root, b).unwrap();

    tree.measure_layout(root, LayoutConstraint::loose(Size::new(500.0, 500.0)), &ltr());

    assert_eq!(tree.frame_size(root), Size::new(90.0, 30.0));
    assert_eq!(tree.frame_offset(a), Point::new(10.0, 5.0));
    assert_eq!(tree.frame_offset(b), Point::new(10.0, 5.0));
}

#[test]
fn rtl_places_children_from_the_trailing_edge() {
    let mut tree = LayoutTree::new();
    let root = padded_root(&mut tree);
    let a = leaf(&mut tree, 40.0, 20.0);
    tree.append_child(root, a).unwrap();

    let constraint = LayoutConstraint::tight(Size::new(200.0, 100.0));
    tree.measure_layout(root, constraint, &env(TextDirection::Rtl));

    // Leading padding of 10 ends up on the right: 200 - 10 - 40.
    assert_eq!(tree.frame_offset(a).x, 150.0);
}

#[test]
fn gone_child_is_measured_to_zero() {
    let mut tree = LayoutTree::new();
    let root = padded_root(&mut tree);
    let a = leaf(&mut tree, 40.0, 20.0);
    tree.append_child(root, a).unwrap();
    tree.property_mut(a).unwrap().visibility = Visibility::Gone;

    tree.measure_layout(root, LayoutConstraint::loose(Size::new(500.0, 500.0)), &ltr());

    assert_eq!(tree.frame_size(a), Size::ZERO);
    assert_eq!(tree.frame_size(root), Size::new(30.0, 10.0));
}

#[test]
fn measured_constraint_is_retained() {
    let mut tree = LayoutTree::new();
    let a = leaf(&mut tree, 40.0, 20.0);
    let constraint = LayoutConstraint::loose(Size::new(100.0, 100.0));
    tree.measure_node(a, constraint, &ltr());

    let geometry = tree.geometry(a).unwrap();
    assert_eq!(geometry.parent_layout_constraint(), Some(constraint));
    assert_eq!(tree.property(a).unwrap().layout_constraint, Some(constraint));
}

#[test]
fn children_are_found_by_tag_and_index() {
    let mut tree = LayoutTree::new();
    let root = padded_root(&mut tree);
    let title = tree.create_node(NodeTag::Title, LayoutProperty::new(), &DefaultAlgorithmFactory);
    let menu = tree.create_node(
        NodeTag::Menu,
        LayoutProperty::new(),
        &DefaultAlgorithmFactory,
    );
    tree.append_child(root, title).unwrap();
    tree.append_child(root, menu).unwrap();

    assert_eq!(tree.child_by_tag(root, NodeTag::Menu), Some(menu));
    assert_eq!(tree.child_by_tag(root, NodeTag::Subtitle), None);
    assert_eq!(tree.child_index_by_id(root, menu), Some(1));
    assert_eq!(tree.parent(menu), Some(root));
}

#[test]
fn append_rejects_second_parent_and_cycles() {
    let mut tree = LayoutTree::new();
    let root = padded_root(&mut tree);
    let other = padded_root(&mut tree);
    let child = leaf(&mut tree, 1.0, 1.0);
    tree.append_child(root, child).unwrap();

    assert_eq!(
        tree.append_child(other, child),
        Err(NodeError::AlreadyAttached { id: child, parent: root })
    );
    assert_eq!(
        tree.append_child(child, root),
        Err(NodeError::InvalidParent { id: root })
    );
    assert_eq!(tree.append_child(root, 99), Err(NodeError::Missing { id: 99 }));
}

#[test]
fn removing_a_node_drops_its_subtree() {
    let mut tree = LayoutTree::new();
    let root = padded_root(&mut tree);
    let mid = padded_root(&mut tree);
    let child = leaf(&mut tree, 1.0, 1.0);
    tree.append_child(root, mid).unwrap();
    tree.append_child(mid, child).unwrap();

    tree.remove_node(mid).unwrap();

    assert!(tree.children(root).is_empty());
    assert!(!tree.contains(child));
    assert_eq!(tree.len(), 1);
}

#[test]
fn global_offset_sums_ancestors() {
    let mut tree = LayoutTree::new();
    let root = padded_root(&mut tree);
    let mid = padded_root(&mut tree);
    let child = leaf(&mut tree, 10.0, 10.0);
    tree.append_child(root, mid).unwrap();
    tree.append_child(mid, child).unwrap();

    tree.measure_layout(root, LayoutConstraint::loose(Size::new(500.0, 500.0)), &ltr());

    assert_eq!(tree.global_offset(child), Point::new(20.0, 10.0));
}

#[test]
fn text_leaf_keeps_line_height_at_zero_width() {
    let mut tree = LayoutTree::new();
    let title = tree.create_node(
        NodeTag::Title,
        LayoutProperty::new().with_text("Inbox"),
        &DefaultAlgorithmFactory,
    );

    tree.measure_node(title, LayoutConstraint::loose(Size::new(0.0, 100.0)), &ltr());

    let size = tree.frame_size(title);
    assert_eq!(size.width, 0.0);
    assert_eq!(size.height, 20.0);
}

struct SelfMeasuring {
    runs: Rc<std::cell::Cell<u32>>,
}

impl LayoutAlgorithm for SelfMeasuring {
    fn measure(&mut self, wrapper: &mut LayoutWrapper<'_>) {
        self.runs.set(self.runs.get() + 1);
        let id = wrapper.node_id();
        wrapper.measure_child(id, LayoutConstraint::zero());
        wrapper.set_frame_size(Size::new(10.0, 10.0));
    }

    fn layout(&mut self, _wrapper: &mut LayoutWrapper<'_>) {}
}

#[test]
fn nested_pass_for_the_running_node_is_refused() {
    let runs = Rc::new(std::cell::Cell::new(0));
    let mut tree = LayoutTree::new();
    let root = tree.create_node_with(
        NodeTag::Generic,
        LayoutProperty::new(),
        Box::new(SelfMeasuring { runs: Rc::clone(&runs) }),
    );

    tree.measure_layout(root, LayoutConstraint::loose(Size::new(100.0, 100.0)), &ltr());

    assert_eq!(runs.get(), 1);
    assert_eq!(tree.frame_size(root), Size::new(10.0, 10.0));
}

type SeenChildren = Rc<std::cell::RefCell<(Vec<NodeId>, Vec<NodeId>)>>;

struct RecordingLookups {
    lookups: Vec<Lookup>,
    seen: SeenChildren,
}

enum Lookup {
    Index(usize),
    Tag(NodeTag),
}

impl LayoutAlgorithm for RecordingLookups {
    fn measure(&mut self, wrapper: &mut LayoutWrapper<'_>) {
        for lookup in &self.lookups {
            match lookup {
                Lookup::Index(index) => wrapper.child_by_index(*index),
                Lookup::Tag(tag) => wrapper.child_by_tag(*tag),
            };
        }
        *self.seen.borrow_mut() = (
            wrapper.materialized_children(),
            wrapper.unmaterialized_children(),
        );
        wrapper.measure_unmaterialized_hidden();
        wrapper.set_frame_size(Size::new(10.0, 10.0));
    }

    fn layout(&mut self, _wrapper: &mut LayoutWrapper<'_>) {}
}

fn lookup_tree(lookups: Vec<Lookup>) -> (LayoutTree, NodeId, [NodeId; 3], SeenChildren) {
    let seen = Rc::new(std::cell::RefCell::new((Vec::new(), Vec::new())));
    let mut tree = LayoutTree::new();
    let root = tree.create_node_with(
        NodeTag::Generic,
        LayoutProperty::new(),
        Box::new(RecordingLookups {
            lookups,
            seen: Rc::clone(&seen),
        }),
    );
    let a = leaf(&mut tree, 30.0, 30.0);
    let menu = tree.create_node(
        NodeTag::Menu,
        LayoutProperty::new(),
        &DefaultAlgorithmFactory,
    );
    let c = leaf(&mut tree, 20.0, 20.0);
    for child in [a, menu, c] {
        tree.append_child(root, child).unwrap();
    }
    (tree, root, [a, menu, c], seen)
}

#[test]
fn wrapper_remembers_children_in_first_access_order() {
    let lookups = vec![
        Lookup::Index(2),
        Lookup::Index(0),
        Lookup::Index(2),
        Lookup::Tag(NodeTag::Menu),
    ];
    let (mut tree, root, [a, menu, c], seen) = lookup_tree(lookups);

    tree.measure_node(root, LayoutConstraint::loose(Size::new(100.0, 100.0)), &ltr());

    let (materialized, unmaterialized) = seen.borrow().clone();
    assert_eq!(materialized, vec![c, a, menu]);
    assert!(unmaterialized.is_empty());
}

#[test]
fn children_never_looked_up_are_collapsed() {
    let (mut tree, root, [a, menu, c], seen) = lookup_tree(vec![Lookup::Index(1)]);
    tree.measure_node(a, LayoutConstraint::loose(Size::new(100.0, 100.0)), &ltr());
    assert_eq!(tree.frame_size(a), Size::new(30.0, 30.0));

    tree.measure_node(root, LayoutConstraint::loose(Size::new(100.0, 100.0)), &ltr());

    let (materialized, unmaterialized) = seen.borrow().clone();
    assert_eq!(materialized, vec![menu]);
    assert_eq!(unmaterialized, vec![a, c]);
    assert_eq!(tree.frame_size(a), Size::ZERO);
    assert_eq!(tree.frame_size(c), Size::ZERO);
}
