//! Folder State Value Object
//!
//! The stored expand/collapse state of a single folder.

use serde::{Deserialize, Serialize};

/// Stored state of a folder in the expansion map.
///
/// `Unset` is not the same as `Collapsed`: it defers to the default policy
/// every time it is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FolderState {
    Expanded,
    Collapsed,
    #[default]
    Unset,
}

impl FolderState {
    /// Resolve to an open/closed boolean, falling back to `default_collapsed`
    pub fn resolve(self, default_collapsed: bool) -> bool {
        match self {
            FolderState::Expanded => true,
            FolderState::Collapsed => false,
            FolderState::Unset => !default_collapsed,
        }
    }

    pub fn is_unset(self) -> bool {
        self == FolderState::Unset
    }
}

impl From<Option<bool>> for FolderState {
    fn from(entry: Option<bool>) -> Self {
        match entry {
            Some(true) => FolderState::Expanded,
            Some(false) => FolderState::Collapsed,
            None => FolderState::Unset,
        }
    }
}
