//! Domain Services
//!
//! Route matching and expansion bookkeeping. No I/O.

mod active_matcher;
mod expansion;

pub use active_matcher::{active_trail, is_active, ActiveTrail};
pub use expansion::ExpansionState;
