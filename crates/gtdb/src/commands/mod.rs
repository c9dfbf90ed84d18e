//! Command handlers, one module per subcommand.

pub mod create;
pub mod exists;
pub mod info;
pub mod version;
