//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds what a command handler needs: the merged
//! configuration and the global output flags.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gittextdb_config::{DirectorySource, GtdbConfig, load_config, load_config_from, resolve_directory};

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Merged configuration (defaults, file, `GTDB_*` env).
    pub config: GtdbConfig,

    /// Whether to produce JSON output (`--json` or `json: true` in config).
    pub json: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Loads `--config` when given, otherwise `.gittextdb.yaml` in the
    /// current directory.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let config = match &global.config {
            Some(path) => load_config_from(path)?,
            None => {
                let cwd = env::current_dir().context("failed to get current directory")?;
                load_config(&cwd)?
            }
        };

        Ok(Self::with_config(global, config))
    }

    fn with_config(global: &GlobalArgs, config: GtdbConfig) -> Self {
        Self {
            json: global.json || config.json,
            verbose: global.verbose,
            quiet: global.quiet,
            config,
        }
    }

    /// Resolve the database directory for a command.
    pub fn resolve_dir(&self, arg: Option<&Path>) -> Result<(PathBuf, DirectorySource)> {
        Ok(resolve_directory(arg, &self.config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(json: bool) -> GlobalArgs {
        GlobalArgs {
            config: None,
            json,
            verbose: false,
            quiet: false,
        }
    }

    #[test]
    fn json_from_flag_or_config() {
        let cfg = GtdbConfig::default();
        assert!(RuntimeContext::with_config(&global(true), cfg.clone()).json);
        assert!(!RuntimeContext::with_config(&global(false), cfg).json);

        let cfg = GtdbConfig {
            json: true,
            ..GtdbConfig::default()
        };
        assert!(RuntimeContext::with_config(&global(false), cfg).json);
    }

    #[test]
    fn resolve_dir_prefers_argument() {
        let cfg = GtdbConfig {
            directory: Some(PathBuf::from("cfg")),
            ..GtdbConfig::default()
        };
        let ctx = RuntimeContext::with_config(&global(false), cfg);
        let (dir, source) = ctx.resolve_dir(Some(Path::new("arg"))).unwrap();
        assert_eq!(dir, PathBuf::from("arg"));
        assert_eq!(source, DirectorySource::Argument);
    }

    #[test]
    fn resolve_dir_without_anything_fails() {
        let ctx = RuntimeContext::with_config(&global(false), GtdbConfig::default());
        let err = ctx.resolve_dir(None).unwrap_err();
        assert!(err.to_string().contains("no database directory"));
    }
}
