//! Maps node tags to the navigation layout algorithms.

use std::rc::Rc;

use tessel_ui_layout::{BoxLayoutAlgorithm, LayoutAlgorithm, LayoutAlgorithmFactory, NodeTag};

use crate::header_text::{HeaderTextLayoutAlgorithm, HeaderTextRole};
use crate::keyboard::KeyboardAvoidance;
use crate::menu::MenuLayoutAlgorithm;
use crate::nav_bar::NavBarLayoutAlgorithm;
use crate::scroll_coordinator::TitleBarScrollCoordinator;
use crate::theme::ThemeProvider;
use crate::title_bar::{TitleBarLayoutAlgorithm, TitleBarParentType};
use crate::tool_bar::ToolBarLayoutAlgorithm;

/// Algorithms for one navigation container.
///
/// Every title bar built through the same factory shares its scroll
/// coordinator and every nav bar its keyboard avoidance handle, so build one
/// factory per navigation container.
#[derive(Clone)]
pub struct NavigationAlgorithmFactory {
    theme: Rc<dyn ThemeProvider>,
    scroll: TitleBarScrollCoordinator,
    keyboard: KeyboardAvoidance,
    parent_type: TitleBarParentType,
}

impl NavigationAlgorithmFactory {
    pub fn new(theme: Rc<dyn ThemeProvider>) -> Self {
        Self {
            theme,
            scroll: TitleBarScrollCoordinator::default(),
            keyboard: KeyboardAvoidance::new(),
            parent_type: TitleBarParentType::NavBar,
        }
    }

    pub fn with_parent_type(mut self, parent_type: TitleBarParentType) -> Self {
        self.parent_type = parent_type;
        self
    }

    pub fn with_scroll_coordinator(mut self, scroll: TitleBarScrollCoordinator) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn scroll_coordinator(&self) -> &TitleBarScrollCoordinator {
        &self.scroll
    }

    pub fn keyboard_avoidance(&self) -> &KeyboardAvoidance {
        &self.keyboard
    }

    pub fn theme(&self) -> &Rc<dyn ThemeProvider> {
        &self.theme
    }
}

impl LayoutAlgorithmFactory for NavigationAlgorithmFactory {
    fn create(&self, tag: NodeTag) -> Box<dyn LayoutAlgorithm> {
        let theme = Rc::clone(&self.theme);
        match tag {
            NodeTag::NavBar => Box::new(NavBarLayoutAlgorithm::new(theme, self.keyboard.clone())),
            NodeTag::TitleBar => Box::new(TitleBarLayoutAlgorithm::new(
                theme,
                self.scroll.clone(),
                self.parent_type,
            )),
            NodeTag::Title => {
                Box::new(HeaderTextLayoutAlgorithm::new(theme, HeaderTextRole::Title))
            }
            NodeTag::Subtitle => {
                Box::new(HeaderTextLayoutAlgorithm::new(theme, HeaderTextRole::Subtitle))
            }
            NodeTag::Menu => Box::new(MenuLayoutAlgorithm::new(theme)),
            NodeTag::ToolBar => Box::new(ToolBarLayoutAlgorithm::new(theme)),
            NodeTag::BackButton
            | NodeTag::MenuItem
            | NodeTag::Content
            | NodeTag::ToolBarItem
            | NodeTag::ToolBarDivider
            | NodeTag::Generic => Box::new(BoxLayoutAlgorithm::default()),
        }
    }
}
