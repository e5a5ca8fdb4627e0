use std::path::PathBuf;

use thiserror::Error;

/// Failures reading, decoding, encoding or writing a document file.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot tell the format of {} (expected .json, .yaml, .yml or .toml)", path.display())]
    UnsupportedExtension { path: PathBuf },

    #[error("unknown document format: '{0}'")]
    UnknownFormat(String),

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("invalid TOML in {}: {source}", path.display())]
    TomlDecode {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("cannot encode {} as TOML: {source}", path.display())]
    TomlEncode {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },
}

impl DocumentError {
    /// The file the error concerns, when there is one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            DocumentError::Io { path, .. }
            | DocumentError::UnsupportedExtension { path }
            | DocumentError::Json { path, .. }
            | DocumentError::Yaml { path, .. }
            | DocumentError::TomlDecode { path, .. }
            | DocumentError::TomlEncode { path, .. } => Some(path),
            DocumentError::UnknownFormat(_) => None,
        }
    }
}
