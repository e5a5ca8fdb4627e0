//! CLI configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.lexmodel/` by default)
//! and deserializes it into [`CliConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::Path;

use lexmodel_core::ValidationOptions;
use serde::{Deserialize, Serialize};

use crate::error::DocumentError;
use crate::format::DocumentFormat;

/// Top-level configuration for the `lexm` CLI.
///
/// Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub output: OutputConfig,
    pub validation: ValidationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Target format for `convert` when `--to` is not given.
    pub format: DocumentFormat,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: DocumentFormat::Json,
            pretty: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Report unset fields the service requires on requests.
    pub enforce_required: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enforce_required: true,
        }
    }
}

impl From<&ValidationConfig> for ValidationOptions {
    fn from(config: &ValidationConfig) -> Self {
        ValidationOptions {
            enforce_required: config.enforce_required,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Export spans to stdout through OpenTelemetry.
    pub otel: bool,
}

/// File name looked up inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// `Ok(None)` when there is no config file.
async fn read_cli_config(path: &Path) -> Result<Option<CliConfig>, DocumentError> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(DocumentError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    DocumentFormat::Toml.decode(&text, path).map(Some)
}

/// Load the `lexm` settings from `{data_dir}/config.toml`.
///
/// A missing file means built-in defaults. An unreadable or malformed file is
/// reported as a warning and also falls back to the defaults, so a broken
/// config never blocks validation.
pub async fn load_cli_config(data_dir: &Path) -> CliConfig {
    let path = data_dir.join(CONFIG_FILE);
    match read_cli_config(&path).await {
        Ok(Some(config)) => config,
        Ok(None) => {
            tracing::debug!(path = %path.display(), "no lexm config file, using built-in defaults");
            CliConfig::default()
        }
        Err(err) => {
            tracing::warn!("ignoring lexm config: {err}; using built-in defaults");
            CliConfig::default()
        }
    }
}
