//! Active route matching.
//!
//! Decides which node the current route points at and which folders lie on
//! the path to it. Matching is exact on canonical paths (trailing slash
//! aside); there is no prefix or fuzzy matching.

use crate::domain::entities::{Folder, PageIndex, TreeNode};
use crate::domain::value_objects::{normalize, routes_match};

/// Whether `node`'s route is the current canonical path
pub fn is_active(node: &TreeNode, current_path: &str, locale: Option<&str>) -> bool {
    routes_match(&normalize(node.route(), locale), current_path)
}

/// The active node together with its ancestor folders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTrail<'a> {
    /// Node whose route matches the current path
    pub node: &'a TreeNode,
    /// Enclosing folders, outermost first
    pub ancestors: Vec<&'a Folder>,
}

impl<'a> ActiveTrail<'a> {
    /// True if the folder at `route` encloses the active node
    pub fn has_ancestor(&self, route: &str) -> bool {
        self.ancestors.iter().any(|f| f.route == route)
    }

    /// True if `route` is the active node or one of its ancestors
    pub fn contains(&self, route: &str) -> bool {
        self.node.route() == route || self.has_ancestor(route)
    }

    /// Ancestor routes, outermost first
    pub fn ancestor_routes(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.ancestors.iter().map(|&f| f.route.as_str())
    }

    /// Folders that must stay open: every ancestor, then the active node
    /// itself when it is a folder
    pub fn open_routes(&self) -> impl Iterator<Item = &'a str> + '_ {
        let own = self.node.as_folder().map(|f| f.route.as_str());
        self.ancestor_routes().chain(own)
    }
}

/// Find the active node and the folders enclosing it.
///
/// Returns `None` when nothing matches (404s, pages outside the index).
/// Routes are unique, so the first depth-first match is the only one.
pub fn active_trail<'a>(
    index: &'a PageIndex,
    current_path: &str,
    locale: Option<&str>,
) -> Option<ActiveTrail<'a>> {
    fn walk<'a>(
        node: &'a TreeNode,
        current_path: &str,
        locale: Option<&str>,
        ancestors: &mut Vec<&'a Folder>,
    ) -> Option<&'a TreeNode> {
        if is_active(node, current_path, locale) {
            return Some(node);
        }
        if let TreeNode::Folder(folder) = node {
            ancestors.push(folder);
            for child in &folder.children {
                if let Some(found) = walk(child, current_path, locale, ancestors) {
                    return Some(found);
                }
            }
            ancestors.pop();
        }
        None
    }

    let mut ancestors = Vec::new();
    for root in &index.roots {
        if let Some(node) = walk(root, current_path, locale, &mut ancestors) {
            return Some(ActiveTrail { node, ancestors });
        }
    }
    None
}
