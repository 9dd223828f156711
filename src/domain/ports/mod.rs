//! Domain Ports (Interfaces)
//!
//! These traits define the boundary between the resolver and the
//! presentation layer that draws the sidebar.

pub mod tree_renderer;

pub use tree_renderer::{ToggleOutcome, TreeRenderer, VisibleRow};
