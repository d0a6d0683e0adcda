//! Spring physics for Tessel layout transitions
//!
//! Animations here are driven by explicit frame timestamps rather than a
//! frame clock, so a layout owner can step them from its own event loop.

mod spring;

pub use spring::*;
