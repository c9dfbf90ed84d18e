//! Configuration types and loading for gittextdb.
//!
//! The main entry point is [`GtdbConfig`], which represents the merged view
//! of built-in defaults, `.gittextdb.yaml`, and `GTDB_*` environment
//! variables. Configuration is loaded with [`load_config`] or
//! [`load_config_from`] and saved with [`save_config`].

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Format, Serialized, Yaml};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::debug;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".gittextdb.yaml";

/// Environment variable overriding `directory`.
pub const DIRECTORY_ENV: &str = "GTDB_DIRECTORY";

/// Environment variable overriding `json`.
pub const JSON_ENV: &str = "GTDB_JSON";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The merged configuration could not be extracted.
    #[error("failed to load configuration: {0}")]
    Extract(#[from] figment::Error),

    /// An explicitly requested configuration file does not exist.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The configuration file could not be written.
    #[error("failed to write config file: {0}")]
    Write(#[from] std::io::Error),

    /// The configuration could not be serialized to YAML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// A configuration value was invalid.
    #[error("invalid configuration value for '{key}': {reason}")]
    InvalidValue {
        /// The environment variable or key that had an invalid value.
        key: String,
        /// A description of why the value is invalid.
        reason: String,
    },

    /// Neither an argument nor the configuration named a directory.
    #[error("no database directory given (pass DIR or set `directory` in .gittextdb.yaml)")]
    NoDirectory,
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Main config struct
// ---------------------------------------------------------------------------

/// The gittextdb configuration.
///
/// All fields use `serde` defaults so a partially-specified YAML file
/// deserializes with sensible values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GtdbConfig {
    /// Default database directory when a command is given none.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_directory"
    )]
    pub directory: Option<PathBuf>,

    /// Output JSON instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

/// Scalars YAML may produce for an unquoted directory name like `2024`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PathScalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Bool(bool),
}

fn deserialize_directory<'de, D>(deserializer: D) -> std::result::Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    let scalar = Option::<PathScalar>::deserialize(deserializer)?;
    Ok(scalar.map(|s| match s {
        PathScalar::Text(s) => PathBuf::from(s),
        PathScalar::Unsigned(n) => PathBuf::from(n.to_string()),
        PathScalar::Signed(n) => PathBuf::from(n.to_string()),
        PathScalar::Bool(b) => PathBuf::from(b.to_string()),
    }))
}

/// Parse a boolean environment value (`1/0`, `true/false`, `yes/no`, `on/off`).
fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

/// Build the layered figment: defaults, then the YAML file, then `GTDB_*`.
///
/// Environment values are taken verbatim rather than type-guessed, so a
/// directory called `2024` stays a path.
fn figment_for(file: &Path) -> Result<Figment> {
    let mut figment =
        Figment::from(Serialized::defaults(GtdbConfig::default())).merge(Yaml::file(file));

    if let Some(dir) = std::env::var_os(DIRECTORY_ENV).filter(|d| !d.is_empty()) {
        figment = figment.merge(Serialized::default("directory", PathBuf::from(dir)));
    }
    if let Ok(value) = std::env::var(JSON_ENV) {
        figment = figment.merge(Serialized::default("json", parse_flag(JSON_ENV, &value)?));
    }

    Ok(figment)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Load configuration for the working directory `base_dir`.
///
/// Reads `base_dir/.gittextdb.yaml` if present, then applies `GTDB_*`
/// environment variables. A missing file yields the defaults.
///
/// # Errors
///
/// Returns [`ConfigError::Extract`] if the file cannot be parsed, or
/// [`ConfigError::InvalidValue`] if `GTDB_JSON` is not a boolean.
pub fn load_config(base_dir: &Path) -> Result<GtdbConfig> {
    let path = base_dir.join(CONFIG_FILE_NAME);
    debug!(path = %path.display(), "loading config");
    Ok(figment_for(&path)?.extract()?)
}

/// Load configuration from an explicit file, then apply `GTDB_*` variables.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if `path` does not exist, or
/// [`ConfigError::Extract`] if it cannot be parsed.
pub fn load_config_from(path: &Path) -> Result<GtdbConfig> {
    if !path.is_file() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    debug!(path = %path.display(), "loading explicit config");
    Ok(figment_for(path)?.extract()?)
}

/// Save configuration to `base_dir/.gittextdb.yaml`.
///
/// # Errors
///
/// Returns [`ConfigError::Serialize`] if serialization fails or
/// [`ConfigError::Write`] on I/O failure.
pub fn save_config(base_dir: &Path, config: &GtdbConfig) -> Result<()> {
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(base_dir.join(CONFIG_FILE_NAME), yaml)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
