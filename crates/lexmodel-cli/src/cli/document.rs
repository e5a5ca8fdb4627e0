//! Document commands: validate, show, convert.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use serde::Serialize;
use tracing::field::Empty;
use tracing::{Instrument, Span};

use lexmodel_core::{Document, ValidationOptions, Violation};
use lexmodel_infra::{CliConfig, DocumentFormat, load_document, save_document};
use lexmodel_observe::attrs;

/// Result of validating one file.
#[derive(Debug, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<&'static str>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<Violation>,
    /// Set when the file could not be loaded at all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Load and validate one file. Load failures become a failed outcome.
pub async fn check_file(path: &Path, options: &ValidationOptions) -> FileOutcome {
    let span = tracing::info_span!(
        "validate_document",
        lexm.document.path = %path.display(),
        lexm.operation = Empty,
        lexm.record = Empty,
        lexm.validation.violations = Empty,
    );
    load_and_check(path, options).instrument(span).await
}

async fn load_and_check(path: &Path, options: &ValidationOptions) -> FileOutcome {
    let span = Span::current();
    match load_document::<Document>(path).await {
        Ok(doc) => {
            let report = doc.validate_with(options);
            span.record(attrs::OPERATION, doc.operation().as_str());
            span.record(attrs::RECORD, doc.record_name());
            span.record(attrs::VIOLATION_COUNT, report.len());
            FileOutcome {
                path: path.to_path_buf(),
                operation: Some(doc.operation().to_string()),
                record: Some(doc.record_name()),
                valid: report.is_valid(),
                violations: report.violations().to_vec(),
                error: None,
            }
        }
        Err(err) => {
            tracing::debug!("failed to load {}: {err}", path.display());
            FileOutcome {
                path: path.to_path_buf(),
                operation: None,
                record: None,
                valid: false,
                violations: Vec::new(),
                error: Some(err.to_string()),
            }
        }
    }
}

/// Validate every file and print a summary.
///
/// Returns `Ok(false)` when any file failed to load or has violations.
///
/// # Examples
///
/// ```bash
/// lexm validate bots/pizza.json intents/*.yaml
/// lexm validate --lenient results/get-bot.toml --json
/// ```
pub async fn validate_files(
    files: &[PathBuf],
    options: ValidationOptions,
    json: bool,
    quiet: bool,
) -> Result<bool> {
    let mut outcomes = Vec::with_capacity(files.len());
    for path in files {
        outcomes.push(check_file(path, &options).await);
    }
    let all_valid = outcomes.iter().all(|o| o.valid);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(all_valid);
    }

    let shown: Vec<&FileOutcome> = outcomes.iter().filter(|o| !quiet || !o.valid).collect();
    if shown.is_empty() {
        return Ok(all_valid);
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("File").fg(Color::White),
        Cell::new("Record").fg(Color::White),
        Cell::new("Result").fg(Color::White),
    ]);

    for outcome in &shown {
        let result_cell = match (&outcome.error, outcome.violations.len()) {
            (Some(_), _) => Cell::new("✗ unreadable").fg(Color::Red),
            (None, 0) => Cell::new("✓ valid").fg(Color::Green),
            (None, n) => Cell::new(format!("✗ {n} violation(s)")).fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(outcome.path.display()),
            Cell::new(outcome.record.unwrap_or("-")),
            result_cell,
        ]);
    }

    println!();
    println!("{table}");

    for outcome in shown.iter().filter(|o| !o.valid) {
        println!();
        println!("  {}", style(outcome.path.display()).bold());
        if let Some(error) = &outcome.error {
            println!("    {} {}", style("✗").red(), error);
        }
        for violation in &outcome.violations {
            println!(
                "    {} {} {}",
                style("•").yellow(),
                style(&violation.path).cyan(),
                violation.kind
            );
        }
    }

    if !quiet {
        let failed = outcomes.iter().filter(|o| !o.valid).count();
        println!();
        if failed == 0 {
            println!(
                "  {} {} file(s) valid",
                style("✓").green().bold(),
                outcomes.len()
            );
        } else {
            println!(
                "  {} {failed} of {} file(s) failed",
                style("✗").red().bold(),
                outcomes.len()
            );
        }
        println!();
    }

    Ok(all_valid)
}

/// Print the record wrapped by a document.
pub async fn show_document(path: &Path, json: bool) -> Result<()> {
    let doc: Document = load_document(path)
        .await
        .with_context(|| format!("cannot show {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let kind = if doc.is_request() { "request" } else { "result" };
    println!();
    println!(
        "  {} {}",
        style(doc.operation()).cyan().bold(),
        style(format!("({kind}, {})", doc.record_name())).dim()
    );
    println!();
    println!("  {doc}");
    println!();
    Ok(())
}

/// Re-encode a document, to `out` or stdout.
///
/// # Examples
///
/// ```bash
/// lexm convert bots/pizza.json --to yaml
/// lexm convert bots/pizza.yaml --out bots/pizza.toml
/// ```
pub async fn convert_document(
    path: &Path,
    to: Option<&str>,
    out: Option<&Path>,
    config: &CliConfig,
    quiet: bool,
) -> Result<()> {
    let doc: Document = load_document(path)
        .await
        .with_context(|| format!("cannot convert {}", path.display()))?;

    let format = target_format(to, out, config)?;
    tracing::info!(from = %path.display(), %format, "converting document");

    match out {
        Some(target) => {
            save_document(target, &doc, format, config.output.pretty).await?;
            if !quiet {
                println!(
                    "  {} Wrote {} ({format})",
                    style("✓").green().bold(),
                    style(target.display()).cyan()
                );
            }
        }
        None => {
            print!("{}", format.encode(&doc, config.output.pretty, path)?);
        }
    }
    Ok(())
}

/// `--to` wins, then the output file's extension, then the config default.
fn target_format(
    to: Option<&str>,
    out: Option<&Path>,
    config: &CliConfig,
) -> Result<DocumentFormat> {
    if let Some(name) = to {
        return Ok(name.parse()?);
    }
    if let Some(path) = out {
        if let Ok(format) = DocumentFormat::from_path(path) {
            return Ok(format);
        }
    }
    Ok(config.output.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const BAD_BOT: &str =
        r#"{"operation": "PutBot", "input": {"name": "P", "locale": "en-US", "childDirected": false}}"#;

    #[tokio::test]
    async fn test_check_file_reports_violations() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bot.json");
        tokio::fs::write(&path, BAD_BOT).await.unwrap();

        let outcome = check_file(&path, &ValidationOptions::default()).await;
        assert!(!outcome.valid);
        assert_eq!(outcome.record, Some("PutBotRequest"));
        assert_eq!(outcome.operation.as_deref(), Some("PutBot"));
        assert_eq!(outcome.violations.len(), 1);
        assert_eq!(outcome.violations[0].path, "name");
    }

    #[tokio::test]
    async fn test_check_file_unreadable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bot.json");
        tokio::fs::write(&path, "{").await.unwrap();

        let outcome = check_file(&path, &ValidationOptions::default()).await;
        assert!(!outcome.valid);
        assert!(outcome.error.is_some());
        assert!(outcome.record.is_none());
    }

    #[tokio::test]
    async fn test_validate_files_summary() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.yaml");
        tokio::fs::write(&good, "operation: GetBot\ninput:\n  name: PizzaBot\n  versionOrAlias: $LATEST\n")
            .await
            .unwrap();
        let bad = dir.path().join("bad.json");
        tokio::fs::write(&bad, BAD_BOT).await.unwrap();

        let options = ValidationOptions::default();
        assert!(validate_files(&[good.clone()], options, true, false).await.unwrap());
        assert!(!validate_files(&[good, bad], options, true, false).await.unwrap());
    }

    #[tokio::test]
    async fn test_convert_to_file_uses_extension() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("bot.json");
        tokio::fs::write(&source, BAD_BOT).await.unwrap();
        let target = dir.path().join("bot.yaml");

        convert_document(&source, None, Some(&target), &CliConfig::default(), true)
            .await
            .unwrap();

        let text = tokio::fs::read_to_string(&target).await.unwrap();
        assert!(text.starts_with("operation: PutBot"), "{text}");
    }

    #[test]
    fn test_target_format_precedence() {
        let config = CliConfig::default();
        let out = Path::new("bot.toml");
        assert_eq!(
            target_format(Some("yaml"), Some(out), &config).unwrap(),
            DocumentFormat::Yaml
        );
        assert_eq!(target_format(None, Some(out), &config).unwrap(), DocumentFormat::Toml);
        assert_eq!(target_format(None, None, &config).unwrap(), DocumentFormat::Json);
        assert!(target_format(Some("xml"), None, &config).is_err());
    }
}
