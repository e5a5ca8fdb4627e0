//! Document encodings and the codec over them.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// On-disk encoding of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    /// Detect the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Ok(DocumentFormat::Json),
            Some("yaml" | "yml") => Ok(DocumentFormat::Yaml),
            Some("toml") => Ok(DocumentFormat::Toml),
            _ => Err(DocumentError::UnsupportedExtension {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Yaml => "yaml",
            DocumentFormat::Toml => "toml",
        }
    }

    /// Decode `text`; `path` is only used for error reporting.
    pub fn decode<T: DeserializeOwned>(self, text: &str, path: &Path) -> Result<T, DocumentError> {
        let path = path.to_path_buf();
        match self {
            DocumentFormat::Json => {
                serde_json::from_str(text).map_err(|source| DocumentError::Json { path, source })
            }
            DocumentFormat::Yaml => {
                serde_yaml_ng::from_str(text).map_err(|source| DocumentError::Yaml { path, source })
            }
            DocumentFormat::Toml => {
                toml::from_str(text).map_err(|source| DocumentError::TomlDecode { path, source })
            }
        }
    }

    /// Encode `value`. `pretty` only affects JSON; YAML and TOML are always
    /// block-formatted.
    pub fn encode<T: Serialize>(
        self,
        value: &T,
        pretty: bool,
        path: &Path,
    ) -> Result<String, DocumentError> {
        let path = path.to_path_buf();
        match self {
            DocumentFormat::Json => {
                let encoded = if pretty {
                    serde_json::to_string_pretty(value)
                } else {
                    serde_json::to_string(value)
                };
                encoded
                    .map(|mut text| {
                        text.push('\n');
                        text
                    })
                    .map_err(|source| DocumentError::Json { path, source })
            }
            DocumentFormat::Yaml => serde_yaml_ng::to_string(value)
                .map_err(|source| DocumentError::Yaml { path, source }),
            DocumentFormat::Toml => toml::to_string_pretty(value)
                .map_err(|source| DocumentError::TomlEncode { path, source }),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DocumentFormat {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "toml" => Ok(DocumentFormat::Toml),
            other => Err(DocumentError::UnknownFormat(other.to_string())),
        }
    }
}
