//! Navigation session.
//!
//! Owns the expansion state for one navigating client (a browser tab, or one
//! server-side render) and applies route changes and toggle clicks in the
//! order they arrive.

use crate::config::{Config, SidebarConfig};
use crate::domain::entities::{PageIndex, TreeNode};
use crate::domain::ports::{ToggleOutcome, TreeRenderer, VisibleRow};
use crate::domain::services::{active_trail, ActiveTrail, ExpansionState};
use crate::domain::value_objects::CurrentRoute;

use super::visible::flatten;

/// Sidebar state for one navigation session
#[derive(Debug, Clone)]
pub struct NavigationSession {
    index: PageIndex,
    sidebar: SidebarConfig,
    expansion: ExpansionState,
    locale: Option<String>,
    current_path: Option<String>,
}

impl NavigationSession {
    /// Create a session over `index` with settings from `config`
    pub fn new(index: PageIndex, config: &Config) -> Self {
        Self {
            index,
            sidebar: config.sidebar,
            expansion: ExpansionState::new(),
            locale: None,
            current_path: None,
        }
    }

    /// Create a session with built-in defaults
    pub fn with_defaults(index: PageIndex) -> Self {
        Self::new(index, &Config::default())
    }

    pub fn index(&self) -> &PageIndex {
        &self.index
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn sidebar_config(&self) -> &SidebarConfig {
        &self.sidebar
    }

    /// Canonical path of the last navigation, if any
    pub fn current_path(&self) -> Option<&str> {
        self.current_path.as_deref()
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Route of the node matching the current path
    pub fn active_route(&self) -> Option<&str> {
        self.trail().map(|t| t.node.route())
    }

    /// Node matching the current path
    pub fn active_node(&self) -> Option<&TreeNode> {
        self.trail().map(|t| t.node)
    }

    /// Handle a route-change event.
    ///
    /// Every folder on the active path is written as expanded, including the
    /// active node when it is a folder. Nothing is ever collapsed here. Returns the active route, or `None`
    /// when the route is outside the index.
    pub fn navigate(&mut self, route: CurrentRoute) -> Option<String> {
        let canonical = route.canonical();
        log::debug!("navigate {} -> {}", route.raw_path, canonical);

        self.locale = route.locale;
        self.current_path = Some(canonical);
        self.discover_active()
    }

    /// Handle a user click on a folder's toggle affordance.
    pub fn toggle(&mut self, route: &str) -> ToggleOutcome {
        let Some(node) = self.index.find(route) else {
            log::debug!("toggle ignored, unknown route {}", route);
            return ToggleOutcome::UnknownRoute;
        };
        let TreeNode::Folder(folder) = node else {
            return ToggleOutcome::NotAFolder;
        };
        if !folder.collapsible {
            return ToggleOutcome::NotCollapsible;
        }

        let pinned = self
            .current_path
            .as_deref()
            .and_then(|path| active_trail(&self.index, path, self.locale.as_deref()))
            .is_some_and(|trail| trail.contains(route));
        if pinned {
            log::debug!("toggle ignored, {} is on the active path", route);
            return ToggleOutcome::PinnedActive;
        }

        let expanded = self
            .expansion
            .flip(folder, self.sidebar.default_collapsed);
        ToggleOutcome::Toggled {
            route: route.to_string(),
            expanded,
        }
    }

    /// Swap in a rebuilt page index.
    ///
    /// Expansion entries are kept; discovery runs again for the current
    /// route so the new active path is open.
    pub fn replace_index(&mut self, index: PageIndex) -> Option<String> {
        self.index = index;
        self.discover_active()
    }

    /// Rows to draw for the current state
    pub fn visible_structure(&self) -> Vec<VisibleRow<'_>> {
        let trail = self.trail();
        flatten(
            &self.index,
            &self.expansion,
            trail.as_ref(),
            self.sidebar.default_collapsed,
        )
    }

    /// Draw the current rows with `renderer`
    pub fn render_with<R: TreeRenderer>(&self, renderer: &mut R) -> R::Output {
        renderer.render(&self.visible_structure())
    }

    fn trail(&self) -> Option<ActiveTrail<'_>> {
        let path = self.current_path.as_deref()?;
        active_trail(&self.index, path, self.locale.as_deref())
    }

    fn discover_active(&mut self) -> Option<String> {
        let path = self.current_path.as_deref()?;
        let Some(trail) = active_trail(&self.index, path, self.locale.as_deref()) else {
            log::debug!("no node matches {}", path);
            return None;
        };

        for route in trail.open_routes() {
            if self.expansion.force_expand(route) {
                log::debug!("expanded {} for active route", route);
            }
        }
        Some(trail.node.route().to_string())
    }
}
