//! Navigation tree nodes.
//!
//! A sidebar is a tree of folders and pages. Folders nest; pages are leaves.
//! Child order is display order and is never re-sorted.

use serde::{Deserialize, Serialize};

/// A leaf page in the navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub name: String,
    pub route: String,
    pub title: String,
}

/// A folder grouping pages and other folders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    pub route: String,
    pub title: String,
    #[serde(default)]
    pub children: Vec<TreeNode>,
    /// Folder-level default used while the folder has no explicit entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// Non-collapsible folders are always open
    #[serde(default = "default_true")]
    pub collapsible: bool,
}

fn default_true() -> bool {
    true
}

impl Folder {
    pub fn new(
        name: impl Into<String>,
        route: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            route: route.into(),
            title: title.into(),
            children: Vec::new(),
            collapsed: None,
            collapsible: true,
        }
    }

    /// Append a child, keeping insertion order
    pub fn with_child(mut self, child: impl Into<TreeNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Override the global default policy for this folder
    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    pub fn with_collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    /// Resolved open state for a folder with no explicit entry
    pub fn default_open(&self, default_collapsed: bool) -> bool {
        !self.collapsible || !self.collapsed.unwrap_or(default_collapsed)
    }
}

/// A node in the navigation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    Folder(Folder),
    Page(Page),
}

impl TreeNode {
    /// Create a leaf page
    pub fn page(name: impl Into<String>, route: impl Into<String>, title: impl Into<String>) -> Self {
        TreeNode::Page(Page {
            name: name.into(),
            route: route.into(),
            title: title.into(),
        })
    }

    /// Create a folder with the given children
    pub fn folder(
        name: impl Into<String>,
        route: impl Into<String>,
        title: impl Into<String>,
        children: impl IntoIterator<Item = TreeNode>,
    ) -> Self {
        TreeNode::Folder(Folder::new(name, route, title).with_children(children))
    }

    pub fn name(&self) -> &str {
        match self {
            TreeNode::Folder(f) => &f.name,
            TreeNode::Page(p) => &p.name,
        }
    }

    pub fn route(&self) -> &str {
        match self {
            TreeNode::Folder(f) => &f.route,
            TreeNode::Page(p) => &p.route,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            TreeNode::Folder(f) => &f.title,
            TreeNode::Page(p) => &p.title,
        }
    }

    /// Children in display order (empty for pages)
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Folder(f) => &f.children,
            TreeNode::Page(_) => &[],
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, TreeNode::Folder(_))
    }

    pub fn as_folder(&self) -> Option<&Folder> {
        match self {
            TreeNode::Folder(f) => Some(f),
            TreeNode::Page(_) => None,
        }
    }

    /// Number of pages in this subtree
    pub fn page_count(&self) -> usize {
        match self {
            TreeNode::Page(_) => 1,
            TreeNode::Folder(f) => f.children.iter().map(TreeNode::page_count).sum(),
        }
    }
}

impl From<Folder> for TreeNode {
    fn from(folder: Folder) -> Self {
        TreeNode::Folder(folder)
    }
}

impl From<Page> for TreeNode {
    fn from(page: Page) -> Self {
        TreeNode::Page(page)
    }
}
