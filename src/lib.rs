//! sidenav - navigation tree resolver for documentation sidebars
//!
//! Given a page index (a tree of folders and pages) and the route being
//! displayed, sidenav decides which page is active, which folders are open,
//! and which rows the sidebar should draw. Expansion state lives in a
//! `NavigationSession`, one per navigating client.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::{visible_structure, NavigationSession};
pub use config::{Config, ConfigWarning, SidebarConfig};
pub use domain::entities::{Folder, Page, PageIndex, TreeNode};
pub use domain::ports::{ToggleOutcome, TreeRenderer, VisibleRow};
pub use domain::services::{active_trail, is_active, ActiveTrail, ExpansionState};
pub use domain::value_objects::{normalize, routes_match, CurrentRoute, FolderState};
pub use error::{NavError, NavResult};
pub use presentation::TextRenderer;
