//! Span attribute names shared by the CLI and libraries.
//!
//! Spans declare these fields as `tracing::field::Empty` and fill them with
//! `Span::record`, so exported traces use one naming scheme.

/// The `lexm` subcommand being run (e.g. "validate").
pub const COMMAND: &str = "lexm.command";

/// Path of the document file being processed.
pub const DOCUMENT_PATH: &str = "lexm.document.path";

/// Encoding of the document file ("json", "yaml", "toml").
pub const DOCUMENT_FORMAT: &str = "lexm.document.format";

/// Model operation named by the document (e.g. "PutBot").
pub const OPERATION: &str = "lexm.operation";

/// Record type wrapped by the document (e.g. "PutBotRequest").
pub const RECORD: &str = "lexm.record";

/// Number of constraint violations found.
pub const VIOLATION_COUNT: &str = "lexm.validation.violations";

// --- Command name values ---

pub const COMMAND_VALIDATE: &str = "validate";
pub const COMMAND_SHOW: &str = "show";
pub const COMMAND_CONVERT: &str = "convert";
pub const COMMAND_SCHEMA: &str = "schema";
pub const COMMAND_ENUMS: &str = "enums";
