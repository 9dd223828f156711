//! Domain Entities
//!
//! The navigation tree supplied by the content pipeline.

mod page_index;
mod tree_node;

pub use page_index::PageIndex;
pub use tree_node::{Folder, Page, TreeNode};
