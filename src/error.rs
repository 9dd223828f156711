//! Error types for sidenav
//!
//! The resolver itself never fails; errors only come from the I/O edges
//! (loading configuration or a page index from disk).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sidenav operations
pub type NavResult<T> = Result<T, NavError>;

/// Main error type for sidenav operations
#[derive(Error, Debug)]
pub enum NavError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML for the expected schema
    #[error("invalid configuration in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Page index document could not be parsed
    #[error("invalid page index: {message}")]
    IndexParse { message: String },

    /// Two nodes in one page index share a route
    #[error("duplicate route '{route}' in page index")]
    DuplicateRoute { route: String },

    /// Two children of the same folder share a name
    #[error("duplicate name '{name}' under '{parent}'")]
    DuplicateSiblingName { parent: String, name: String },
}

impl From<serde_json::Error> for NavError {
    fn from(err: serde_json::Error) -> Self {
        NavError::IndexParse {
            message: err.to_string(),
        }
    }
}
