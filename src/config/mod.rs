//! Configuration module for sidenav
//!
//! Configuration hierarchy:
//! 1. Environment variables (SIDENAV_*)
//! 2. Project config (.sidenav.toml)
//! 3. User config (~/.config/sidenav/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, ENV_DEFAULT_COLLAPSED, PROJECT_CONFIG_FILE};
pub use types::{Config, SidebarConfig};
