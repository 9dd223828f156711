//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::NavResult;

use super::loader::{self, ConfigWarning};

/// Sidebar configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SidebarConfig {
    /// Resolved state of folders that have no explicit entry
    #[serde(default)]
    pub default_collapsed: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sidebar: SidebarConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> NavResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> NavResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (SIDENAV_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
