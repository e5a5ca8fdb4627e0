//! Document files and the data directory.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::DocumentError;
use crate::format::DocumentFormat;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "LEXMODEL_HOME";

/// Load a document, picking the decoder from the file extension.
pub async fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    let format = DocumentFormat::from_path(path)?;
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), %format, bytes = text.len(), "loaded document");
    format.decode(&text, path)
}

/// Write `value` to `path` in `format`, creating parent directories.
pub async fn save_document<T: Serialize>(
    path: &Path,
    value: &T,
    format: DocumentFormat,
    pretty: bool,
) -> Result<(), DocumentError> {
    let text = format.encode(value, pretty, path)?;
    let io_error = |source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
    }
    tokio::fs::write(path, text).await.map_err(io_error)?;
    tracing::debug!(path = %path.display(), %format, "saved document");
    Ok(())
}

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `LEXMODEL_HOME` environment variable
/// 2. `~/.lexmodel`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".lexmodel");
    }

    // Last resort: current directory
    PathBuf::from(".lexmodel")
}
