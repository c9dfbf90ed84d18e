//! Core types for gittextdb.
//!
//! A [`TextDatabase`] is a handle on the directory that holds a text
//! database. Constructing one with [`TextDatabase::create`] checks the
//! filesystem and refuses a directory that is already present.

pub mod database;
pub mod error;

pub use database::TextDatabase;
pub use error::{CreateError, Result};

/// Version of the core crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
