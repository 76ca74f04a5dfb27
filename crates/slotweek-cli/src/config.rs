//! Configuration for the `slotweek` binary.
//!
//! The config file is TOML with three sections:
//!
//! ```toml
//! [editor]
//! extend_policy = "sticky"
//!
//! [logging]
//! filter = "info,slotweek=debug"
//!
//! [output]
//! pretty = false
//! ```
//!
//! Every key is optional; a missing file is the same as an empty one.

use serde::{Deserialize, Serialize};
use slotweek_editor::ExtendPolicy;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Directory and binary name.
pub const PROJECT_NAME: &str = "slotweek";

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "SLOTWEEK_CONFIG";

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info,slotweek=debug";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotweekConfig {
    /// Drag behaviour
    pub editor: EditorConfig,
    /// Log filtering
    pub logging: LoggingConfig,
    /// Output formatting
    pub output: OutputConfig,
}

/// `[editor]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// How a drag treats cells outside its current span
    pub extend_policy: ExtendPolicy,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Indent JSON output
    pub pretty: bool,
}

impl SlotweekConfig {
    /// Resolves the config file path.
    ///
    /// Order: `explicit`, then `$SLOTWEEK_CONFIG`, then the platform config
    /// directory.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        resolve_with(explicit, std::env::var_os(CONFIG_ENV))
    }

    /// `<config dir>/slotweek/config.toml`, if the platform has one.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Loads the resolved config file, or defaults when there is none.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Reads and parses one config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        toml::from_str(&content).map_err(|e| Error::parse(path, e))
    }

    /// Renders the config as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

fn resolve_with(explicit: Option<&str>, env: Option<OsString>) -> Option<PathBuf> {
    explicit
        .map(PathBuf::from)
        .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(SlotweekConfig::default_config_path)
}
