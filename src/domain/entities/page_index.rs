//! Page index entity.
//!
//! The ordered list of top-level sidebar nodes produced by the site's
//! content pipeline. Treated as immutable; a content change replaces it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::tree_node::TreeNode;
use crate::error::{NavError, NavResult};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageIndex {
    pub roots: Vec<TreeNode>,
}

impl PageIndex {
    pub fn new(roots: Vec<TreeNode>) -> Self {
        Self { roots }
    }

    /// Parse the JSON document emitted by a page-index builder
    pub fn from_json_str(json: &str) -> NavResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a page index file
    pub fn load(path: &Path) -> NavResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Find the node with exactly this route
    pub fn find(&self, route: &str) -> Option<&TreeNode> {
        fn walk<'a>(node: &'a TreeNode, route: &str) -> Option<&'a TreeNode> {
            if node.route() == route {
                return Some(node);
            }
            node.children().iter().find_map(|c| walk(c, route))
        }
        self.roots.iter().find_map(|r| walk(r, route))
    }

    /// Routes of every folder, depth-first in display order
    pub fn folder_routes(&self) -> Vec<&str> {
        fn walk<'a>(node: &'a TreeNode, acc: &mut Vec<&'a str>) {
            if node.is_folder() {
                acc.push(node.route());
            }
            for child in node.children() {
                walk(child, acc);
            }
        }
        let mut acc = Vec::new();
        for root in &self.roots {
            walk(root, &mut acc);
        }
        acc
    }

    /// Number of pages across the whole index
    pub fn page_count(&self) -> usize {
        self.roots.iter().map(TreeNode::page_count).sum()
    }

    /// Check that routes are unique tree-wide and names unique among siblings.
    ///
    /// The resolver does not require this; it is offered to index builders.
    pub fn validate(&self) -> NavResult<()> {
        fn check_siblings(parent: &str, children: &[TreeNode]) -> NavResult<()> {
            let mut names = HashSet::new();
            for child in children {
                if !names.insert(child.name()) {
                    return Err(NavError::DuplicateSiblingName {
                        parent: parent.to_string(),
                        name: child.name().to_string(),
                    });
                }
            }
            Ok(())
        }

        fn walk<'a>(node: &'a TreeNode, routes: &mut HashSet<&'a str>) -> NavResult<()> {
            if !routes.insert(node.route()) {
                return Err(NavError::DuplicateRoute {
                    route: node.route().to_string(),
                });
            }
            check_siblings(node.route(), node.children())?;
            for child in node.children() {
                walk(child, routes)?;
            }
            Ok(())
        }

        check_siblings("/", &self.roots)?;
        let mut routes = HashSet::new();
        for root in &self.roots {
            walk(root, &mut routes)?;
        }
        Ok(())
    }
}

impl From<Vec<TreeNode>> for PageIndex {
    fn from(roots: Vec<TreeNode>) -> Self {
        Self::new(roots)
    }
}
