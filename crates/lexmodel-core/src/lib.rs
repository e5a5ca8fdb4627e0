//! Validation and document handling for lexmodel records.
//!
//! - [`validate`]: the documented service constraints (lengths, patterns,
//!   ranges, required fields), checked on demand via the [`Validate`] trait
//! - [`document`]: the operation envelope used to store requests and results
//!   on disk
//! - [`schema`]: JSON schemas of records and documents

pub mod document;
pub mod error;
pub mod schema;
pub mod validate;

pub use document::{Document, Operation, RequestDocument, ResultDocument};
pub use error::{CoreError, ValidationError};
pub use validate::{Validate, ValidationOptions, ValidationReport, Violation, ViolationKind};
