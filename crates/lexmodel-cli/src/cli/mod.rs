//! CLI command definitions for the `lexm` binary.
//!
//! Uses clap derive macros for argument parsing. Every command reads
//! operation documents (`{"operation": ..., "input" | "output": ...}`) in
//! JSON, YAML or TOML.

pub mod catalog;
pub mod document;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Validate, inspect and convert bot-building model documents.
#[derive(Parser)]
#[command(name = "lexm", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check documents against the service's documented constraints.
    #[command(alias = "check")]
    Validate {
        /// Document files (.json, .yaml, .yml, .toml).
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Skip required-field rules, overriding the config file.
        #[arg(long)]
        lenient: bool,
    },

    /// Print a document's record in its debug rendering.
    Show {
        /// Document file.
        file: PathBuf,
    },

    /// Re-encode a document in another format.
    Convert {
        /// Document file to read.
        file: PathBuf,

        /// Target format: json, yaml or toml (default from config).
        #[arg(long)]
        to: Option<String>,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Print the JSON schema of a record or document (lists shapes when omitted).
    Schema {
        /// Shape name, e.g. PutBotRequest or RequestDocument.
        shape: Option<String>,
    },

    /// List closed-value enums and their allowed values.
    Enums {
        /// Only show this enum, e.g. Status.
        name: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
