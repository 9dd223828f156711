//! Current Route Value Object
//!
//! A route-change event delivered by the host router on every navigation.

use serde::{Deserialize, Serialize};

use super::canonical_path::normalize;

/// The route being displayed, as reported by the host router.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CurrentRoute {
    /// Path as the router sees it, e.g. `/fr/guides/index`
    pub raw_path: String,
    /// Active locale, if the site is localised
    #[serde(default)]
    pub locale: Option<String>,
}

impl CurrentRoute {
    /// Route without a locale
    pub fn new(raw_path: impl Into<String>) -> Self {
        Self {
            raw_path: raw_path.into(),
            locale: None,
        }
    }

    /// Route under a locale
    pub fn localized(raw_path: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            raw_path: raw_path.into(),
            locale: Some(locale.into()),
        }
    }

    /// Locale as a borrowed str
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Canonical form of `raw_path` under this route's locale
    pub fn canonical(&self) -> String {
        normalize(&self.raw_path, self.locale())
    }
}
