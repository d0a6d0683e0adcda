//! The measure/layout contract.

use crate::box_layout::BoxLayoutAlgorithm;
use crate::text::TextLayoutAlgorithm;
use crate::tree::NodeTag;
use crate::wrapper::LayoutWrapper;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Measure,
    Layout,
}

/// Sizing and placement logic attached to one node.
///
/// `measure` reads the incoming constraint from the wrapper, measures whatever
/// children it needs with derived constraints and writes this node's frame
/// size. It never assigns offsets. `layout` reads the measured sizes and
/// writes every child's frame offset. It never resizes, except through the
/// explicit re-measure escape hatch a composite may use from inside `layout`.
pub trait LayoutAlgorithm {
    fn measure(&mut self, wrapper: &mut LayoutWrapper<'_>);

    fn layout(&mut self, wrapper: &mut LayoutWrapper<'_>);
}

/// Picks the algorithm for a node when the tree is built.
///
/// One factory is chosen per container type and injected at construction;
/// nothing is selected through global state.
pub trait LayoutAlgorithmFactory {
    fn create(&self, tag: NodeTag) -> Box<dyn LayoutAlgorithm>;
}

/// Text for title-like tags, a plain box for everything else.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultAlgorithmFactory;

impl LayoutAlgorithmFactory for DefaultAlgorithmFactory {
    fn create(&self, tag: NodeTag) -> Box<dyn LayoutAlgorithm> {
        match tag {
            NodeTag::Title | NodeTag::Subtitle => Box::new(TextLayoutAlgorithm::default()),
            _ => Box::new(BoxLayoutAlgorithm::default()),
        }
    }
}
