//! Text outline renderer.
//!
//! Reference `TreeRenderer` that draws visible rows as an indented outline,
//! one row per line. Useful for logs, snapshots and terminal previews.

use crate::domain::ports::{TreeRenderer, VisibleRow};

mod icons {
    pub const OPEN: &str = "▾";
    pub const CLOSED: &str = "▸";
    pub const PAGE: &str = "·";
}

mod icons_ascii {
    pub const OPEN: &str = "v";
    pub const CLOSED: &str = ">";
    pub const PAGE: &str = "-";
}

const ACTIVE_SUFFIX: &str = " (current)";

/// Renders rows to a `String`, two spaces of indent per level
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    supports_unicode: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            supports_unicode: true,
        }
    }
}

impl TextRenderer {
    pub fn new(supports_unicode: bool) -> Self {
        Self { supports_unicode }
    }

    pub fn ascii() -> Self {
        Self::new(false)
    }

    /// Render a single row (no trailing newline)
    pub fn render_row(&self, row: &VisibleRow<'_>) -> String {
        let indent = "  ".repeat(row.depth);
        let icon = match (row.is_folder(), row.is_open, self.supports_unicode) {
            (true, true, true) => icons::OPEN,
            (true, true, false) => icons_ascii::OPEN,
            (true, false, true) => icons::CLOSED,
            (true, false, false) => icons_ascii::CLOSED,
            (false, _, true) => icons::PAGE,
            (false, _, false) => icons_ascii::PAGE,
        };
        let suffix = if row.is_active { ACTIVE_SUFFIX } else { "" };

        format!("{}{} {}{}", indent, icon, row.title(), suffix)
    }
}

impl TreeRenderer for TextRenderer {
    type Output = String;

    fn render(&mut self, rows: &[VisibleRow<'_>]) -> String {
        rows.iter()
            .map(|row| self.render_row(row))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
