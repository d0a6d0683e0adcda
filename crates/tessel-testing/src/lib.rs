//! Testing utilities and fixtures for Tessel layout

pub mod assertions;
pub mod env;
pub mod nav_tree;

pub use assertions::*;
pub use env::*;
pub use nav_tree::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::env::TestEnv;
    pub use crate::nav_tree::{NavTree, NavTreeBuilder};
}
