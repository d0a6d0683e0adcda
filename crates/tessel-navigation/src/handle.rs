//! Typed access to the regions of a navigation composite.
//!
//! A handle is only an id that was checked against its tag when created.
//! Region getters look children up by tag, so a missing region is `None`.

use tessel_ui_graphics::Rect;
use tessel_ui_layout::{LayoutTree, NodeError, NodeId, NodeTag};

fn checked(tree: &LayoutTree, id: NodeId, expected: NodeTag) -> Result<NodeId, NodeError> {
    let found = tree.node(id)?.tag();
    if found == expected {
        Ok(id)
    } else {
        Err(NodeError::UnexpectedTag {
            id,
            expected,
            found,
        })
    }
}

fn frame(tree: &LayoutTree, id: NodeId) -> Rect {
    Rect::from_origin_size(tree.frame_offset(id), tree.frame_size(id))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NavBarHandle {
    id: NodeId,
}

impl NavBarHandle {
    pub fn new(tree: &LayoutTree, id: NodeId) -> Result<Self, NodeError> {
        checked(tree, id, NodeTag::NavBar).map(|id| Self { id })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn title_bar(&self, tree: &LayoutTree) -> Option<TitleBarHandle> {
        tree.child_by_tag(self.id, NodeTag::TitleBar)
            .map(|id| TitleBarHandle { id })
    }

    pub fn content(&self, tree: &LayoutTree) -> Option<NodeId> {
        tree.child_by_tag(self.id, NodeTag::Content)
    }

    /// Content region, or an error naming the missing child.
    pub fn require_content(&self, tree: &LayoutTree) -> Result<NodeId, NodeError> {
        self.content(tree).ok_or(NodeError::MissingChild {
            parent: self.id,
            tag: NodeTag::Content,
        })
    }

    pub fn tool_bar(&self, tree: &LayoutTree) -> Option<NodeId> {
        tree.child_by_tag(self.id, NodeTag::ToolBar)
    }

    pub fn tool_bar_divider(&self, tree: &LayoutTree) -> Option<NodeId> {
        tree.child_by_tag(self.id, NodeTag::ToolBarDivider)
    }

    pub fn frame(&self, tree: &LayoutTree) -> Rect {
        frame(tree, self.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TitleBarHandle {
    id: NodeId,
}

impl TitleBarHandle {
    pub fn new(tree: &LayoutTree, id: NodeId) -> Result<Self, NodeError> {
        checked(tree, id, NodeTag::TitleBar).map(|id| Self { id })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn title(&self, tree: &LayoutTree) -> Option<NodeId> {
        tree.child_by_tag(self.id, NodeTag::Title)
    }

    pub fn subtitle(&self, tree: &LayoutTree) -> Option<NodeId> {
        tree.child_by_tag(self.id, NodeTag::Subtitle)
    }

    pub fn back_button(&self, tree: &LayoutTree) -> Option<NodeId> {
        tree.child_by_tag(self.id, NodeTag::BackButton)
    }

    pub fn menu(&self, tree: &LayoutTree) -> Option<NodeId> {
        tree.child_by_tag(self.id, NodeTag::Menu)
    }

    pub fn frame(&self, tree: &LayoutTree) -> Rect {
        frame(tree, self.id)
    }
}
