//! Navigation bar, title bar and toolbar layout algorithms for Tessel
//!
//! A navigation bar stacks a title bar, a content region and an optional
//! toolbar (with its divider) vertically. The algorithms here size those
//! regions from theme constants, the API target version, safe-area insets and
//! the coordinated-scroll state of the title bar.

mod factory;
mod handle;
mod header_text;
mod keyboard;
mod menu;
mod nav_bar;
mod overlap;
mod scroll_coordinator;
mod sizing_policy;
mod theme;
mod title_bar;
mod tool_bar;

pub use factory::*;
pub use handle::*;
pub use header_text::*;
pub use keyboard::*;
pub use menu::*;
pub use nav_bar::*;
pub use overlap::*;
pub use scroll_coordinator::*;
pub use sizing_policy::*;
pub use theme::*;
pub use title_bar::*;
pub use tool_bar::*;

pub mod prelude {
    pub use crate::factory::NavigationAlgorithmFactory;
    pub use crate::handle::{NavBarHandle, TitleBarHandle};
    pub use crate::scroll_coordinator::{CoordScrollState, TitleBarScrollCoordinator};
    pub use crate::theme::{NavigationTheme, ThemeProvider};
}
