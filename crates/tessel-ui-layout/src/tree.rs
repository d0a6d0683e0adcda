//! Node storage for layout.
//!
//! Nodes live in a slot vector indexed by [`NodeId`]. A node owns its
//! children through the id list; the parent link is a plain id and never keeps
//! the parent alive.

use std::fmt;

use smallvec::SmallVec;
use tessel_ui_graphics::{Point, Size};

use crate::algorithm::{LayoutAlgorithm, LayoutAlgorithmFactory, Phase};
use crate::constraint::LayoutConstraint;
use crate::geometry_node::GeometryNode;
use crate::property::LayoutProperty;
use crate::wrapper::{LayoutEnv, LayoutWrapper};

pub type NodeId = usize;

/// Semantic role of a node inside a navigation composite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeTag {
    NavBar,
    TitleBar,
    Title,
    Subtitle,
    BackButton,
    Menu,
    MenuItem,
    Content,
    ToolBar,
    ToolBarItem,
    ToolBarDivider,
    Generic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    Missing { id: NodeId },
    MissingChild { parent: NodeId, tag: NodeTag },
    AlreadyAttached { id: NodeId, parent: NodeId },
    InvalidParent { id: NodeId },
    UnexpectedTag { id: NodeId, expected: NodeTag, found: NodeTag },
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeError::Missing { id } => write!(f, "node {id} missing"),
            NodeError::MissingChild { parent, tag } => {
                write!(f, "node {parent} has no {tag:?} child")
            }
            NodeError::AlreadyAttached { id, parent } => {
                write!(f, "node {id} already attached to {parent}")
            }
            NodeError::InvalidParent { id } => write!(f, "node {id} cannot be its own ancestor"),
            NodeError::UnexpectedTag {
                id,
                expected,
                found,
            } => write!(f, "node {id} is a {found:?}, expected {expected:?}"),
        }
    }
}

impl std::error::Error for NodeError {}

pub struct Node {
    id: NodeId,
    tag: NodeTag,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    geometry: GeometryNode,
    property: LayoutProperty,
    algorithm: Option<Box<dyn LayoutAlgorithm>>,
}

impl Node {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tag(&self) -> NodeTag {
        self.tag
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn geometry(&self) -> &GeometryNode {
        &self.geometry
    }

    pub fn property(&self) -> &LayoutProperty {
        &self.property
    }

    pub fn property_mut(&mut self) -> &mut LayoutProperty {
        &mut self.property
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct LayoutTree {
    nodes: Vec<Option<Node>>,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached node whose algorithm comes from `factory`.
    pub fn create_node(
        &mut self,
        tag: NodeTag,
        property: LayoutProperty,
        factory: &dyn LayoutAlgorithmFactory,
    ) -> NodeId {
        let algorithm = factory.create(tag);
        self.create_node_with(tag, property, algorithm)
    }

    pub fn create_node_with(
        &mut self,
        tag: NodeTag,
        property: LayoutProperty,
        algorithm: Box<dyn LayoutAlgorithm>,
    ) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Some(Node {
            id,
            tag,
            parent: None,
            children: SmallVec::new(),
            geometry: GeometryNode::new(),
            property,
            algorithm: Some(algorithm),
        }));
        id
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), NodeError> {
        if parent == child || self.is_ancestor(child, parent) {
            return Err(NodeError::InvalidParent { id: child });
        }
        self.node(parent)?;
        let child_node = self.node_mut(child)?;
        if let Some(existing) = child_node.parent {
            return Err(NodeError::AlreadyAttached {
                id: child,
                parent: existing,
            });
        }
        child_node.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Removes `id` and its whole subtree.
    pub fn remove_node(&mut self, id: NodeId) -> Result<(), NodeError> {
        let parent = self.node(id)?.parent;
        if let Some(parent) = parent {
            if let Ok(parent_node) = self.node_mut(parent) {
                parent_node.children.retain(|child| *child != id);
            }
        }
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            if let Some(node) = self.nodes.get_mut(current).and_then(Option::take) {
                pending.extend(node.children.iter().copied());
            }
        }
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, NodeError> {
        self.nodes
            .get(id)
            .and_then(Option::as_ref)
            .ok_or(NodeError::Missing { id })
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, NodeError> {
        self.nodes
            .get_mut(id)
            .and_then(Option::as_mut)
            .ok_or(NodeError::Missing { id })
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_ok()
    }

    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tag(&self, id: NodeId) -> Option<NodeTag> {
        self.node(id).ok().map(Node::tag)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).ok().and_then(Node::parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or(&[])
    }

    /// First child of `parent` carrying `tag`.
    pub fn child_by_tag(&self, parent: NodeId, tag: NodeTag) -> Option<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .find(|child| self.tag(*child) == Some(tag))
    }

    pub fn child_index_by_id(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.children(parent).iter().position(|id| *id == child)
    }

    pub fn geometry(&self, id: NodeId) -> Option<&GeometryNode> {
        self.node(id).ok().map(Node::geometry)
    }

    pub fn geometry_mut(&mut self, id: NodeId) -> Option<&mut GeometryNode> {
        self.node_mut(id).ok().map(|node| &mut node.geometry)
    }

    pub fn property(&self, id: NodeId) -> Option<&LayoutProperty> {
        self.node(id).ok().map(Node::property)
    }

    pub fn property_mut(&mut self, id: NodeId) -> Option<&mut LayoutProperty> {
        self.node_mut(id).ok().map(Node::property_mut)
    }

    pub fn frame_size(&self, id: NodeId) -> Size {
        self.geometry(id)
            .map(GeometryNode::frame_size)
            .unwrap_or(Size::ZERO)
    }

    pub fn frame_offset(&self, id: NodeId) -> Point {
        self.geometry(id)
            .map(GeometryNode::frame_offset)
            .unwrap_or(Point::ZERO)
    }

    /// Offset of `id` from the root's origin, summed over its ancestors.
    pub fn global_offset(&self, id: NodeId) -> Point {
        let mut offset = Point::ZERO;
        let mut current = Some(id);
        let mut remaining = self.nodes.len();
        while let Some(node_id) = current {
            if remaining == 0 {
                log::warn!("parent chain of node {id} does not terminate");
                break;
            }
            remaining -= 1;
            offset = offset + self.frame_offset(node_id);
            current = self.parent(node_id);
        }
        offset
    }

    fn is_ancestor(&self, candidate: NodeId, of: NodeId) -> bool {
        let mut current = self.parent(of);
        let mut remaining = self.nodes.len();
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            if remaining == 0 {
                break;
            }
            remaining -= 1;
            current = self.parent(id);
        }
        false
    }

    /// Measures `id` under `constraint`, recursing into whatever children its
    /// algorithm measures.
    pub fn measure_node(&mut self, id: NodeId, constraint: LayoutConstraint, env: &LayoutEnv) {
        let Ok(node) = self.node_mut(id) else {
            log::warn!("measure requested for missing node {id}");
            return;
        };
        let constraint = if node.property.is_gone() {
            LayoutConstraint::zero()
        } else {
            constraint
        };
        node.property.layout_constraint = Some(constraint);
        node.geometry.set_parent_layout_constraint(constraint);
        self.run_algorithm(id, env, Phase::Measure);
    }

    /// Lays out the children of `id`; its own offset must already be set.
    pub fn layout_node(&mut self, id: NodeId, env: &LayoutEnv) {
        self.run_algorithm(id, env, Phase::Layout);
    }

    /// Full frame pass: measure the whole tree, then lay it out.
    pub fn measure_layout(&mut self, root: NodeId, constraint: LayoutConstraint, env: &LayoutEnv) {
        self.measure_node(root, constraint, env);
        self.layout_node(root, env);
    }

    fn run_algorithm(&mut self, id: NodeId, env: &LayoutEnv, phase: Phase) {
        let Ok(node) = self.node_mut(id) else {
            log::warn!("{phase:?} requested for missing node {id}");
            return;
        };
        // The algorithm is out of its slot while it runs, so a nested call for
        // the same node lands here and is refused.
        let Some(mut algorithm) = node.algorithm.take() else {
            log::warn!("node {id} re-entered during {phase:?}");
            return;
        };
        {
            let mut wrapper = LayoutWrapper::new(self, env, id);
            match phase {
                Phase::Measure => algorithm.measure(&mut wrapper),
                Phase::Layout => algorithm.layout(&mut wrapper),
            }
        }
        if let Ok(node) = self.node_mut(id) {
            node.algorithm = Some(algorithm);
        }
    }
}

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tests;
