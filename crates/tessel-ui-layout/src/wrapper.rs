//! The view of the tree an algorithm gets while it runs.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use tessel_ui_graphics::{Point, Size};

use crate::constraint::LayoutConstraint;
use crate::display::DisplayInfo;
use crate::property::LayoutProperty;
use crate::safe_area::SafeAreaProvider;
use crate::text::{MonospacedTextMeasurer, TextMeasurer};
use crate::tree::{LayoutTree, NodeId, NodeTag};

/// Collaborators and facts that stay fixed for one frame.
#[derive(Clone)]
pub struct LayoutEnv {
    pub display: DisplayInfo,
    pub safe_area: Rc<dyn SafeAreaProvider>,
    pub text_measurer: Rc<dyn TextMeasurer>,
}

impl LayoutEnv {
    pub fn new(display: DisplayInfo, safe_area: Rc<dyn SafeAreaProvider>) -> Self {
        Self {
            display,
            safe_area,
            text_measurer: Rc::new(MonospacedTextMeasurer::default()),
        }
    }

    pub fn with_text_measurer(mut self, measurer: Rc<dyn TextMeasurer>) -> Self {
        self.text_measurer = measurer;
        self
    }

    pub fn is_rtl(&self) -> bool {
        self.display.is_rtl()
    }
}

impl fmt::Debug for LayoutEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutEnv")
            .field("display", &self.display)
            .field("safe_area", &self.safe_area.safe_area())
            .finish_non_exhaustive()
    }
}

/// Thin adapter bundling one node, a snapshot of its property and lazy access
/// to its children.
pub struct LayoutWrapper<'a> {
    tree: &'a mut LayoutTree,
    env: &'a LayoutEnv,
    node: NodeId,
    property: LayoutProperty,
    materialized: IndexMap<usize, NodeId>,
}

impl<'a> LayoutWrapper<'a> {
    pub fn new(tree: &'a mut LayoutTree, env: &'a LayoutEnv, node: NodeId) -> Self {
        let property = tree.property(node).cloned().unwrap_or_default();
        Self {
            tree,
            env,
            node,
            property,
            materialized: IndexMap::new(),
        }
    }

    pub fn node_id(&self) -> NodeId {
        self.node
    }

    pub fn tag(&self) -> Option<NodeTag> {
        self.tree.tag(self.node)
    }

    pub fn env(&self) -> &LayoutEnv {
        self.env
    }

    pub fn tree(&self) -> &LayoutTree {
        &*self.tree
    }

    pub fn layout_property(&self) -> &LayoutProperty {
        &self.property
    }

    /// Property of the parent node, if this node is attached.
    pub fn parent_property(&self) -> Option<&LayoutProperty> {
        self.tree
            .parent(self.node)
            .and_then(|parent| self.tree.property(parent))
    }

    /// Constraint handed down for the current pass.
    pub fn layout_constraint(&self) -> LayoutConstraint {
        self.property.layout_constraint.unwrap_or_default()
    }

    pub fn is_rtl(&self) -> bool {
        self.env.is_rtl()
    }

    /// API target version: this node's override, then the parent's, then the
    /// display's.
    pub fn api_target_version(&self) -> u32 {
        self.property
            .api_target_version
            .or_else(|| self.parent_property().and_then(|p| p.api_target_version))
            .unwrap_or(self.env.display.api_target_version)
    }

    pub fn frame_size(&self) -> Size {
        self.tree.frame_size(self.node)
    }

    pub fn set_frame_size(&mut self, size: Size) {
        if let Some(geometry) = self.tree.geometry_mut(self.node) {
            geometry.set_frame_size(size);
        }
    }

    pub fn frame_offset(&self) -> Point {
        self.tree.frame_offset(self.node)
    }

    pub fn global_offset(&self) -> Point {
        self.tree.global_offset(self.node)
    }

    pub fn total_child_count(&self) -> usize {
        self.tree.children(self.node).len()
    }

    /// Child at `index`, materialized on first access.
    pub fn child_by_index(&mut self, index: usize) -> Option<NodeId> {
        if let Some(id) = self.materialized.get(&index) {
            return Some(*id);
        }
        let id = self.tree.children(self.node).get(index).copied()?;
        self.materialized.insert(index, id);
        Some(id)
    }

    pub fn child_by_tag(&mut self, tag: NodeTag) -> Option<NodeId> {
        let id = self.tree.child_by_tag(self.node, tag)?;
        if let Some(index) = self.tree.child_index_by_id(self.node, id) {
            self.materialized.insert(index, id);
        }
        Some(id)
    }

    /// Children reached through `child_by_index` or `child_by_tag` so far, in
    /// first-access order.
    pub fn materialized_children(&self) -> Vec<NodeId> {
        self.materialized.values().copied().collect()
    }

    /// Children this pass has not looked up yet, in child order.
    pub fn unmaterialized_children(&self) -> Vec<NodeId> {
        self.tree
            .children(self.node)
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.materialized.contains_key(index))
            .map(|(_, id)| *id)
            .collect()
    }

    /// Collapses every child this pass never looked up, so a stray child does
    /// not keep a size from an earlier frame.
    pub fn measure_unmaterialized_hidden(&mut self) {
        for id in self.unmaterialized_children() {
            self.measure_hidden_child(id);
        }
    }

    pub fn child_index_by_id(&self, id: NodeId) -> Option<usize> {
        self.tree.child_index_by_id(self.node, id)
    }

    pub fn children(&self) -> Vec<NodeId> {
        self.tree.children(self.node).to_vec()
    }

    pub fn child_property(&self, id: NodeId) -> Option<&LayoutProperty> {
        self.tree.property(id)
    }

    pub fn child_frame_size(&self, id: NodeId) -> Size {
        self.tree.frame_size(id)
    }

    pub fn child_frame_offset(&self, id: NodeId) -> Point {
        self.tree.frame_offset(id)
    }

    pub fn child_count_of(&self, id: NodeId) -> usize {
        self.tree.children(id).len()
    }

    /// Measures a child and returns its resulting frame size.
    pub fn measure_child(&mut self, id: NodeId, constraint: LayoutConstraint) -> Size {
        self.tree.measure_node(id, constraint, self.env);
        self.tree.frame_size(id)
    }

    /// Measures a hidden child with a forced zero size.
    pub fn measure_hidden_child(&mut self, id: NodeId) {
        self.tree.measure_node(id, LayoutConstraint::zero(), self.env);
    }

    /// Sets a child's offset, then lays out its own subtree.
    pub fn place_child(&mut self, id: NodeId, offset: Point) {
        if let Some(geometry) = self.tree.geometry_mut(id) {
            geometry.set_frame_offset(offset);
        }
        self.tree.layout_node(id, self.env);
    }

    /// Puts a hidden child at the origin.
    pub fn place_hidden_child(&mut self, id: NodeId) {
        self.place_child(id, Point::ZERO);
    }
}
