//! Configuration management for gittextdb.
//!
//! This crate loads `.gittextdb.yaml`, layers `GTDB_*` environment
//! variables over it, and decides which database directory a command
//! should operate on.

pub mod config;
pub mod directory;

pub use config::{ConfigError, GtdbConfig, load_config, load_config_from, save_config};
pub use directory::{DirectorySource, resolve_directory};
