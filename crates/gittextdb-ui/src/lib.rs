//! Terminal styling for gittextdb output.
//!
//! Provides color detection and a small set of semantic render helpers.

pub mod styles;
pub mod terminal;
