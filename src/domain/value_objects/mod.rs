//! Domain Value Objects
//!
//! Immutable value types for routes and folder state.

mod canonical_path;
mod current_route;
mod folder_state;

pub use canonical_path::{normalize, routes_match};
pub use current_route::CurrentRoute;
pub use folder_state::FolderState;
