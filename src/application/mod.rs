//! Application Layer
//!
//! Coordinates the domain services for a host page layer.
//!
//! - `NavigationSession` - owns expansion state, applies route changes and toggles
//! - `visible_structure` - pure query producing the rows to draw

mod session;
mod visible;

pub use session::NavigationSession;
pub use visible::visible_structure;
