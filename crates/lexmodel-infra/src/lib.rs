//! Infrastructure layer for lexmodel.
//!
//! Reads and writes operation documents in JSON, YAML or TOML, loads the CLI
//! configuration file, and resolves the data directory.

pub mod config;
pub mod error;
pub mod filesystem;
pub mod format;

pub use config::{CliConfig, load_cli_config};
pub use error::DocumentError;
pub use filesystem::{load_document, resolve_data_dir, save_document};
pub use format::DocumentFormat;
