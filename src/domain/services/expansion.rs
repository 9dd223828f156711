//! Expansion state.
//!
//! Route-keyed expand/collapse entries for one navigation session. Entries
//! are created on the first toggle or when a folder joins the active path,
//! and are never removed. A missing entry defers to the default policy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Folder;
use crate::domain::value_objects::FolderState;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionState {
    entries: HashMap<String, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw entry for a route (`None` means Unset)
    pub fn entry(&self, route: &str) -> Option<bool> {
        self.entries.get(route).copied()
    }

    pub fn state(&self, route: &str) -> FolderState {
        FolderState::from(self.entry(route))
    }

    /// Effective open state of a folder.
    ///
    /// Non-collapsible folders are always open. Otherwise the explicit entry
    /// wins, then the folder's own default, then `default_collapsed`.
    /// Never writes an entry.
    pub fn is_open(&self, folder: &Folder, default_collapsed: bool) -> bool {
        if !folder.collapsible {
            return true;
        }
        self.entry(&folder.route)
            .unwrap_or_else(|| folder.default_open(default_collapsed))
    }

    /// Write an explicit entry
    pub fn set(&mut self, route: impl Into<String>, expanded: bool) {
        self.entries.insert(route.into(), expanded);
    }

    /// Flip the resolved state of a folder and store the result
    pub fn flip(&mut self, folder: &Folder, default_collapsed: bool) -> bool {
        let expanded = !self.is_open(folder, default_collapsed);
        self.set(folder.route.clone(), expanded);
        expanded
    }

    /// Force an entry to expanded. Returns true if the stored entry changed.
    pub fn force_expand(&mut self, route: &str) -> bool {
        let entry = self.entries.entry(route.to_string()).or_insert(false);
        let changed = !*entry;
        *entry = true;
        changed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate explicit entries (arbitrary order)
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
