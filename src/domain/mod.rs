//! Domain Layer
//!
//! The core of sidenav: route canonicalisation, active matching and
//! expansion bookkeeping, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - The navigation tree (TreeNode, PageIndex)
//! - `value_objects/` - Immutable values (canonical paths, CurrentRoute, FolderState)
//! - `services/` - Matching and state services (ActiveMatcher, ExpansionState)
//! - `ports/` - The renderer boundary

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
