//! Presentation Layer
//!
//! Shipped `TreeRenderer` implementations. Host applications usually bring
//! their own; `TextRenderer` covers logs, terminals and snapshots.

mod text;

pub use text::TextRenderer;
