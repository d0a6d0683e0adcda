//! Title and subtitle text leaves.
//!
//! Both measure as plain text; only the default font size is header-specific.
//! The title mode that picks the title font is inherited from the nearest
//! ancestor that sets one.

use std::rc::Rc;

use tessel_ui_layout::{
    LayoutAlgorithm, LayoutTree, LayoutWrapper, NodeId, TextLayoutAlgorithm, TitleMode,
};

use crate::sizing_policy::SizingPolicy;
use crate::theme::ThemeProvider;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderTextRole {
    Title,
    Subtitle,
}

/// Text leaf of a title bar whose default font size comes from the theme.
///
/// The title uses the big font in FULL and FREE modes. An explicit
/// `font_size` on the node still wins.
pub struct HeaderTextLayoutAlgorithm {
    theme: Rc<dyn ThemeProvider>,
    role: HeaderTextRole,
}

impl HeaderTextLayoutAlgorithm {
    pub fn new(theme: Rc<dyn ThemeProvider>, role: HeaderTextRole) -> Self {
        Self { theme, role }
    }

    fn font_size(&self, wrapper: &LayoutWrapper<'_>) -> Option<f32> {
        let policy = SizingPolicy::for_wrapper(wrapper, &*self.theme)?;
        Some(match self.role {
            HeaderTextRole::Title => {
                policy.title_font_size_for(inherited_title_mode(wrapper.tree(), wrapper.node_id()))
            }
            HeaderTextRole::Subtitle => policy.subtitle_font_size,
        })
    }
}

/// Title mode set on the nearest ancestor (or the node itself).
pub(crate) fn inherited_title_mode(tree: &LayoutTree, id: NodeId) -> TitleMode {
    let mut current = Some(id);
    let mut remaining = tree.len();
    while let Some(node) = current {
        if remaining == 0 {
            break;
        }
        remaining -= 1;
        if let Some(mode) = tree.property(node).and_then(|p| p.title_mode) {
            return mode;
        }
        current = tree.parent(node);
    }
    TitleMode::default()
}

impl LayoutAlgorithm for HeaderTextLayoutAlgorithm {
    fn measure(&mut self, wrapper: &mut LayoutWrapper<'_>) {
        let mut text = match self.font_size(wrapper) {
            Some(font_size) => TextLayoutAlgorithm::new(font_size),
            None => TextLayoutAlgorithm::default(),
        };
        text.measure(wrapper);
    }

    fn layout(&mut self, _wrapper: &mut LayoutWrapper<'_>) {}
}
