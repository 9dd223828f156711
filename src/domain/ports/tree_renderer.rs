//! Tree Renderer Port
//!
//! The boundary between the resolver and whatever draws the sidebar.
//! The resolver hands over flattened rows; the presentation layer hands back
//! toggle requests and receives a `ToggleOutcome` describing what changed.

use crate::domain::entities::TreeNode;

/// One visible sidebar row, in depth-first display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    pub node: &'a TreeNode,
    /// Nesting level (0 = top level)
    pub depth: usize,
    /// Resolved open state (always false for pages)
    pub is_open: bool,
    /// The node's route is the current route
    pub is_active: bool,
}

impl VisibleRow<'_> {
    pub fn route(&self) -> &str {
        self.node.route()
    }

    pub fn title(&self) -> &str {
        self.node.title()
    }

    pub fn is_folder(&self) -> bool {
        self.node.is_folder()
    }
}

/// Result of a user toggle request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The folder's state was flipped and stored
    Toggled { route: String, expanded: bool },
    /// Folder is active or encloses the active node; state kept
    PinnedActive,
    /// Folder is marked non-collapsible; state kept
    NotCollapsible,
    /// Route names a page, which has no open state
    NotAFolder,
    /// Route is not in the current index (stale snapshot)
    UnknownRoute,
}

impl ToggleOutcome {
    /// Whether the expansion state was mutated
    pub fn changed(&self) -> bool {
        matches!(self, ToggleOutcome::Toggled { .. })
    }
}

/// Trait implemented by presentation layers that draw visible rows.
///
/// Implementations can be:
/// - `TextRenderer`: indented text outline (shipped)
/// - an HTML or terminal widget in the host application
pub trait TreeRenderer {
    type Output;

    /// Draw one snapshot of visible rows
    fn render(&mut self, rows: &[VisibleRow<'_>]) -> Self::Output;
}
