//! Visible structure query.
//!
//! Flattens the navigation tree into the rows a sidebar draws. A folder
//! header is always emitted; its children only when the folder is open.

use crate::domain::entities::{PageIndex, TreeNode};
use crate::domain::ports::VisibleRow;
use crate::domain::services::{active_trail, ActiveTrail, ExpansionState};

/// Flatten `index` into visible rows for `current_path`.
///
/// Pure: nothing is written to `expansion`. Folders on the active path,
/// the active folder included, are reported open even if discovery has not
/// been recorded yet.
pub fn visible_structure<'a>(
    index: &'a PageIndex,
    expansion: &ExpansionState,
    current_path: &str,
    locale: Option<&str>,
    default_collapsed: bool,
) -> Vec<VisibleRow<'a>> {
    let trail = active_trail(index, current_path, locale);
    flatten(index, expansion, trail.as_ref(), default_collapsed)
}

pub(crate) fn flatten<'a>(
    index: &'a PageIndex,
    expansion: &ExpansionState,
    trail: Option<&ActiveTrail<'_>>,
    default_collapsed: bool,
) -> Vec<VisibleRow<'a>> {
    let mut rows = Vec::new();
    for root in &index.roots {
        flatten_node(root, 0, expansion, trail, default_collapsed, &mut rows);
    }
    rows
}

fn flatten_node<'a>(
    node: &'a TreeNode,
    depth: usize,
    expansion: &ExpansionState,
    trail: Option<&ActiveTrail<'_>>,
    default_collapsed: bool,
    rows: &mut Vec<VisibleRow<'a>>,
) {
    let is_active = trail.is_some_and(|t| t.node.route() == node.route());
    let is_open = match node {
        TreeNode::Folder(folder) => {
            expansion.is_open(folder, default_collapsed)
                || trail.is_some_and(|t| t.contains(&folder.route))
        }
        TreeNode::Page(_) => false,
    };

    rows.push(VisibleRow {
        node,
        depth,
        is_open,
        is_active,
    });

    if is_open {
        for child in node.children() {
            flatten_node(child, depth + 1, expansion, trail, default_collapsed, rows);
        }
    }
}
