//! Builder for navigation composites.

use tessel_ui_graphics::{Point, Rect, Size};
use tessel_ui_layout::{
    LayoutAlgorithmFactory, LayoutConstraint, LayoutEnv, LayoutProperty, LayoutTree, NodeId,
    NodeTag, OptionalSize,
};

/// Describes which regions a test nav bar has.
#[derive(Clone, Debug)]
pub struct NavTreeBuilder {
    nav_bar: LayoutProperty,
    title_bar: Option<LayoutProperty>,
    title: Option<String>,
    subtitle: Option<String>,
    back_button: bool,
    menu_items: usize,
    custom_menu: Option<Size>,
    content: Option<LayoutProperty>,
    tool_bar_items: usize,
    custom_tool_bar: Option<Size>,
}

impl Default for NavTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NavTreeBuilder {
    /// Nav bar with a titled title bar and empty content.
    pub fn new() -> Self {
        Self {
            nav_bar: LayoutProperty::new(),
            title_bar: Some(LayoutProperty::new()),
            title: Some("Title".to_string()),
            subtitle: None,
            back_button: false,
            menu_items: 0,
            custom_menu: None,
            content: Some(LayoutProperty::new()),
            tool_bar_items: 0,
            custom_tool_bar: None,
        }
    }

    pub fn nav_bar(mut self, update: impl FnOnce(&mut LayoutProperty)) -> Self {
        update(&mut self.nav_bar);
        self
    }

    pub fn title_bar(mut self, update: impl FnOnce(&mut LayoutProperty)) -> Self {
        if let Some(property) = self.title_bar.as_mut() {
            update(property);
        }
        self
    }

    pub fn without_title_bar(mut self) -> Self {
        self.title_bar = None;
        self
    }

    pub fn title(mut self, text: impl Into<String>) -> Self {
        self.title = Some(text.into());
        self
    }

    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    pub fn subtitle(mut self, text: impl Into<String>) -> Self {
        self.subtitle = Some(text.into());
        self
    }

    pub fn back_button(mut self) -> Self {
        self.back_button = true;
        self
    }

    pub fn menu_items(mut self, count: usize) -> Self {
        self.menu_items = count;
        self
    }

    /// Application-provided menu with a fixed natural size.
    pub fn custom_menu(mut self, size: Size) -> Self {
        self.custom_menu = Some(size);
        self
    }

    pub fn content(mut self, update: impl FnOnce(&mut LayoutProperty)) -> Self {
        if let Some(property) = self.content.as_mut() {
            update(property);
        }
        self
    }

    pub fn without_content(mut self) -> Self {
        self.content = None;
        self
    }

    /// Framework toolbar with `count` items and a divider.
    pub fn tool_bar_items(mut self, count: usize) -> Self {
        self.tool_bar_items = count;
        self
    }

    /// Application-provided toolbar with one child of `size`.
    pub fn custom_tool_bar(mut self, size: Size) -> Self {
        self.custom_tool_bar = Some(size);
        self
    }

    pub fn build(self, factory: &dyn LayoutAlgorithmFactory) -> NavTree {
        let mut tree = LayoutTree::new();
        let nav_bar = tree.create_node(NodeTag::NavBar, self.nav_bar, factory);
        let mut nav = NavTree::empty(nav_bar);

        if let Some(property) = self.title_bar {
            let title_bar = add(&mut tree, factory, nav_bar, NodeTag::TitleBar, property);
            nav.title_bar = Some(title_bar);
            if self.back_button {
                nav.back_button = Some(add(
                    &mut tree,
                    factory,
                    title_bar,
                    NodeTag::BackButton,
                    LayoutProperty::new(),
                ));
            }
            if let Some(text) = self.title {
                let property = LayoutProperty::new().with_text(text);
                nav.title = Some(add(&mut tree, factory, title_bar, NodeTag::Title, property));
            }
            if let Some(text) = self.subtitle {
                let property = LayoutProperty::new().with_text(text);
                let subtitle = add(&mut tree, factory, title_bar, NodeTag::Subtitle, property);
                nav.subtitle = Some(subtitle);
            }
            if let Some(size) = self.custom_menu {
                let custom = LayoutProperty::new().with_custom(true);
                let menu = add(&mut tree, factory, title_bar, NodeTag::Menu, custom);
                add(&mut tree, factory, menu, NodeTag::Generic, sized(size));
                nav.menu = Some(menu);
            } else if self.menu_items > 0 {
                let menu = add(
                    &mut tree,
                    factory,
                    title_bar,
                    NodeTag::Menu,
                    LayoutProperty::new(),
                );
                for _ in 0..self.menu_items {
                    let item = add(
                        &mut tree,
                        factory,
                        menu,
                        NodeTag::MenuItem,
                        LayoutProperty::new(),
                    );
                    nav.menu_items.push(item);
                }
                nav.menu = Some(menu);
            }
        }

        if let Some(property) = self.content {
            nav.content = Some(add(&mut tree, factory, nav_bar, NodeTag::Content, property));
        }

        if let Some(size) = self.custom_tool_bar {
            let custom = LayoutProperty::new().with_custom(true);
            let tool_bar = add(&mut tree, factory, nav_bar, NodeTag::ToolBar, custom);
            add(&mut tree, factory, tool_bar, NodeTag::Generic, sized(size));
            nav.tool_bar = Some(tool_bar);
        } else if self.tool_bar_items > 0 {
            let tool_bar = add(
                &mut tree,
                factory,
                nav_bar,
                NodeTag::ToolBar,
                LayoutProperty::new(),
            );
            for _ in 0..self.tool_bar_items {
                let item = add(
                    &mut tree,
                    factory,
                    tool_bar,
                    NodeTag::ToolBarItem,
                    LayoutProperty::new(),
                );
                nav.tool_bar_items.push(item);
            }
            nav.tool_bar = Some(tool_bar);
            nav.divider = Some(add(
                &mut tree,
                factory,
                nav_bar,
                NodeTag::ToolBarDivider,
                LayoutProperty::new(),
            ));
        }

        nav.tree = tree;
        nav
    }
}

fn add(
    tree: &mut LayoutTree,
    factory: &dyn LayoutAlgorithmFactory,
    parent: NodeId,
    tag: NodeTag,
    property: LayoutProperty,
) -> NodeId {
    let id = tree.create_node(tag, property, factory);
    tree.append_child(parent, id)
        .expect("fresh node attaches to its parent");
    id
}

fn sized(size: Size) -> LayoutProperty {
    LayoutProperty::new().with_user_size(OptionalSize::from_size(size))
}

/// A built nav bar tree and the ids of its regions.
#[derive(Debug)]
pub struct NavTree {
    pub tree: LayoutTree,
    pub nav_bar: NodeId,
    pub title_bar: Option<NodeId>,
    pub title: Option<NodeId>,
    pub subtitle: Option<NodeId>,
    pub back_button: Option<NodeId>,
    pub menu: Option<NodeId>,
    pub menu_items: Vec<NodeId>,
    pub content: Option<NodeId>,
    pub tool_bar: Option<NodeId>,
    pub tool_bar_items: Vec<NodeId>,
    pub divider: Option<NodeId>,
}

impl NavTree {
    fn empty(nav_bar: NodeId) -> Self {
        Self {
            tree: LayoutTree::new(),
            nav_bar,
            title_bar: None,
            title: None,
            subtitle: None,
            back_button: None,
            menu: None,
            menu_items: Vec::new(),
            content: None,
            tool_bar: None,
            tool_bar_items: Vec::new(),
            divider: None,
        }
    }

    /// Measures and lays out the nav bar into a window-sized tight box.
    pub fn run(&mut self, env: &LayoutEnv) {
        let window = env.display.window_size;
        self.tree
            .measure_layout(self.nav_bar, LayoutConstraint::tight(window), env);
    }

    /// Moves the nav bar inside its parent, e.g. below a status bar.
    pub fn place_at(&mut self, origin: Point) {
        if let Some(geometry) = self.tree.geometry_mut(self.nav_bar) {
            geometry.set_frame_offset(origin);
        }
    }

    pub fn run_with(&mut self, constraint: LayoutConstraint, env: &LayoutEnv) {
        self.tree.measure_layout(self.nav_bar, constraint, env);
    }

    pub fn measure(&mut self, constraint: LayoutConstraint, env: &LayoutEnv) {
        self.tree.measure_node(self.nav_bar, constraint, env);
    }

    pub fn layout(&mut self, env: &LayoutEnv) {
        self.tree.layout_node(self.nav_bar, env);
    }

    pub fn size(&self, id: NodeId) -> Size {
        self.tree.frame_size(id)
    }

    pub fn height(&self, id: Option<NodeId>) -> f32 {
        id.map(|id| self.tree.frame_size(id).height).unwrap_or(0.0)
    }

    /// Frame relative to the parent.
    pub fn frame(&self, id: NodeId) -> Rect {
        Rect::from_origin_size(self.tree.frame_offset(id), self.tree.frame_size(id))
    }

    /// Frame relative to the nav bar's parent.
    pub fn global_frame(&self, id: NodeId) -> Rect {
        Rect::from_origin_size(self.tree.global_offset(id), self.tree.frame_size(id))
    }
}
