//! Choosing the database directory a command operates on.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::{ConfigError, GtdbConfig};

/// Where a resolved directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorySource {
    /// Passed explicitly on the command line.
    Argument,
    /// Taken from `directory` in the configuration.
    Config,
}

impl DirectorySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Argument => "argument",
            Self::Config => "config",
        }
    }
}

impl fmt::Display for DirectorySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the database directory: an explicit argument wins over the config.
///
/// # Errors
///
/// Returns [`ConfigError::NoDirectory`] when neither names a directory.
pub fn resolve_directory(
    argument: Option<&Path>,
    config: &GtdbConfig,
) -> Result<(PathBuf, DirectorySource), ConfigError> {
    if let Some(dir) = argument {
        return Ok((dir.to_path_buf(), DirectorySource::Argument));
    }
    config
        .directory
        .clone()
        .map(|dir| (dir, DirectorySource::Config))
        .ok_or(ConfigError::NoDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config_with(dir: Option<&str>) -> GtdbConfig {
        GtdbConfig {
            directory: dir.map(PathBuf::from),
            ..GtdbConfig::default()
        }
    }

    #[test]
    fn argument_wins_over_config() {
        let (dir, source) =
            resolve_directory(Some(Path::new("cli")), &config_with(Some("cfg"))).unwrap();
        assert_eq!(dir, PathBuf::from("cli"));
        assert_eq!(source, DirectorySource::Argument);
    }

    #[test]
    fn config_used_without_argument() {
        let (dir, source) = resolve_directory(None, &config_with(Some("cfg"))).unwrap();
        assert_eq!(dir, PathBuf::from("cfg"));
        assert_eq!(source, DirectorySource::Config);
    }

    #[test]
    fn neither_is_an_error() {
        let err = resolve_directory(None, &config_with(None)).unwrap_err();
        assert!(matches!(err, ConfigError::NoDirectory));
    }

    #[test]
    fn source_display() {
        assert_eq!(DirectorySource::Argument.to_string(), "argument");
        assert_eq!(DirectorySource::Config.to_string(), "config");
    }
}
