//! Documented constraint checks for records.
//!
//! Records accept any value when built. Constraints documented by the service
//! (lengths, patterns, numeric ranges, list sizes, required fields) are only
//! checked when [`Validate::validate`] is called, which collects every
//! violation into a [`ValidationReport`] instead of stopping at the first.

pub mod records;
pub mod rules;

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;
use rules::TextRule;

/// Knobs for a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Report unset fields the service requires on requests.
    pub enforce_required: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            enforce_required: true,
        }
    }
}

/// What is wrong with a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    Missing,
    Length { min: usize, max: usize, actual: usize },
    Pattern { pattern: &'static str },
    Range { min: i32, max: i32, actual: i32 },
    Count { min: usize, max: usize, actual: usize },
    Conflict { message: &'static str },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Missing => write!(f, "is required"),
            ViolationKind::Length { min, max, actual } => {
                write!(f, "length {actual} is outside {min}..={max}")
            }
            ViolationKind::Pattern { pattern } => write!(f, "does not match pattern {pattern}"),
            ViolationKind::Range { min, max, actual } => {
                write!(f, "value {actual} is outside {min}..={max}")
            }
            ViolationKind::Count { min, max, actual } => {
                write!(f, "has {actual} item(s), allowed {min}..={max}")
            }
            ViolationKind::Conflict { message } => f.write_str(message),
        }
    }
}

/// One failed constraint, located by its wire path (`intents[2].intentName`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub path: String,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.kind)
    }
}

/// Every violation found in one record, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether any violation is reported at exactly `path`.
    pub fn has_violation_at(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ValidationError { report: self })
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {violation}")?;
        }
        Ok(())
    }
}

/// Records a record's violations under a path prefix.
pub struct Checker<'a> {
    prefix: String,
    options: ValidationOptions,
    report: &'a mut ValidationReport,
}

impl<'a> Checker<'a> {
    pub fn new(options: &ValidationOptions, report: &'a mut ValidationReport) -> Self {
        Self {
            prefix: String::new(),
            options: *options,
            report,
        }
    }

    fn path(&self, field: &str) -> String {
        if self.prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{field}", self.prefix)
        }
    }

    fn child(&mut self, prefix: String) -> Checker<'_> {
        Checker {
            prefix,
            options: self.options,
            report: &mut *self.report,
        }
    }

    /// Same location with required rules off, for result records and
    /// everything nested in them.
    pub fn without_required(&mut self) -> Checker<'_> {
        Checker {
            prefix: self.prefix.clone(),
            options: ValidationOptions {
                enforce_required: false,
            },
            report: &mut *self.report,
        }
    }

    fn push(&mut self, field: &str, kind: ViolationKind) {
        let path = self.path(field);
        self.report.violations.push(Violation { path, kind });
    }

    /// Service-required field. Skipped when required rules are off.
    pub fn require(&mut self, field: &str, present: bool) {
        if self.options.enforce_required && !present {
            self.push(field, ViolationKind::Missing);
        }
    }

    pub fn text(&mut self, field: &str, value: Option<&str>, rule: &TextRule) {
        let Some(value) = value else { return };
        let actual = value.chars().count();
        if actual < rule.min || actual > rule.max {
            self.push(
                field,
                ViolationKind::Length {
                    min: rule.min,
                    max: rule.max,
                    actual,
                },
            );
            return;
        }
        if let Some(pattern) = rule.pattern {
            if !pattern.is_match(value) {
                self.push(
                    field,
                    ViolationKind::Pattern {
                        pattern: pattern.source(),
                    },
                );
            }
        }
    }

    pub fn range(&mut self, field: &str, value: Option<i32>, (min, max): (i32, i32)) {
        if let Some(actual) = value {
            if actual < min || actual > max {
                self.push(field, ViolationKind::Range { min, max, actual });
            }
        }
    }

    pub fn count<T>(&mut self, field: &str, values: Option<&[T]>, (min, max): (usize, usize)) {
        if let Some(values) = values {
            let actual = values.len();
            if actual < min || actual > max {
                self.push(field, ViolationKind::Count { min, max, actual });
            }
        }
    }

    pub fn conflict(&mut self, field: &str, message: &'static str) {
        self.push(field, ViolationKind::Conflict { message });
    }

    pub fn nested<T: Validate>(&mut self, field: &str, value: Option<&T>) {
        if let Some(value) = value {
            let prefix = self.path(field);
            value.check_fields(&mut self.child(prefix));
        }
    }

    pub fn each<T: Validate>(&mut self, field: &str, values: Option<&[T]>) {
        for (i, value) in values.unwrap_or_default().iter().enumerate() {
            let prefix = format!("{}[{i}]", self.path(field));
            value.check_fields(&mut self.child(prefix));
        }
    }

    pub fn each_text(&mut self, field: &str, values: Option<&[String]>, rule: &TextRule) {
        for (i, value) in values.unwrap_or_default().iter().enumerate() {
            self.text(&format!("{field}[{i}]"), Some(value), rule);
        }
    }
}

/// A record whose documented constraints can be checked.
pub trait Validate {
    /// Report this record's violations into `checker`.
    fn check_fields(&self, checker: &mut Checker<'_>);

    fn validate(&self) -> ValidationReport {
        self.validate_with(&ValidationOptions::default())
    }

    fn validate_with(&self, options: &ValidationOptions) -> ValidationReport {
        let mut report = ValidationReport::default();
        self.check_fields(&mut Checker::new(options, &mut report));
        tracing::trace!(violations = report.len(), "validated record");
        report
    }

    /// `Ok(())` when the record satisfies every constraint.
    fn check(&self) -> Result<(), ValidationError> {
        self.validate().into_result()
    }
}
