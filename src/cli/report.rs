//! Report formatting and printing utilities.
//!
//! Diagnostics go to stdout so build systems capture them with the exit
//! status. Verbose progress goes to stderr.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::args::OutputFormat;
use crate::{
    check::CheckResult,
    config::Config,
    diagnostics::{USAGE_MESSAGE, headline, notes, plural},
    methods::MethodSequence,
    validate::{AvailabilityMismatch, DispatchMismatch, Outcome},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Machine-readable report for `--format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    notes: Vec<String>,
    expected: &'a MethodSequence,
    found: &'a MethodSequence,
    #[serde(skip_serializing_if = "Option::is_none")]
    available: Option<&'a MethodSequence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dispatch_mismatch: Option<&'a DispatchMismatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    availability_mismatch: Option<&'a AvailabilityMismatch>,
}

#[derive(Debug, Serialize)]
struct JsonUsageReport {
    outcome: &'static str,
    message: &'static str,
}

/// Print the result of a run to stdout.
pub fn print(result: &CheckResult, config: &Config, format: OutputFormat) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => print_text_to(result, config, &mut stdout),
        OutputFormat::Json => print_json_to(result, config, &mut stdout),
    }
}

/// Print the invalid-usage diagnostic to stdout.
pub fn print_usage(format: OutputFormat) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => writeln!(stdout, "{}", USAGE_MESSAGE)?,
        OutputFormat::Json => {
            let report = JsonUsageReport {
                outcome: "invalid-usage",
                message: USAGE_MESSAGE,
            };
            writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }
    Ok(())
}

/// Print the text report to a custom writer.
///
/// A valid run prints nothing. A failed run prints the fixed headline on the
/// first line, followed by cargo-style notes naming the methods involved.
pub fn print_text_to<W: Write>(
    result: &CheckResult,
    config: &Config,
    writer: &mut W,
) -> Result<()> {
    let Some(message) = headline(&result.outcome, config) else {
        return Ok(());
    };

    writeln!(writer, "{}", message)?;
    for note in notes(&result.outcome) {
        writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), note)?;
    }
    Ok(())
}

/// Print the JSON report to a custom writer.
pub fn print_json_to<W: Write>(
    result: &CheckResult,
    config: &Config,
    writer: &mut W,
) -> Result<()> {
    let (dispatch_mismatch, availability_mismatch) = match &result.outcome {
        Outcome::Valid => (None, None),
        Outcome::DispatchMismatch(mismatch) => (Some(mismatch), None),
        Outcome::AvailabilityMismatch(mismatch) => (None, Some(mismatch)),
    };

    let report = JsonReport {
        outcome: result.outcome.as_str(),
        message: headline(&result.outcome, config),
        notes: notes(&result.outcome),
        expected: &result.expected,
        found: &result.found,
        available: result.available.as_ref(),
        dispatch_mismatch,
        availability_mismatch,
    };

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

/// Print a verbose summary of what was extracted to stderr.
pub fn print_summary(result: &CheckResult) {
    print_summary_to(result, &mut io::stderr().lock());
}

/// Print the verbose summary to a custom writer.
pub fn print_summary_to<W: Write>(result: &CheckResult, writer: &mut W) {
    let sources = &result.sources;
    let _ = writeln!(
        writer,
        "{} {} implemented {} in {} {}",
        "info:".bold().cyan(),
        result.expected.len(),
        plural(result.expected.len(), "method", "methods"),
        sources.implementations.len(),
        plural(sources.implementations.len(), "file", "files"),
    );
    let _ = writeln!(
        writer,
        "{} {} dispatch {} in {}",
        "info:".bold().cyan(),
        result.found.len(),
        plural(result.found.len(), "entry", "entries"),
        sources.interface.display()
    );
    match (&result.available, &sources.header) {
        (Some(available), Some(header)) => {
            let _ = writeln!(
                writer,
                "{} {} table {} in {}",
                "info:".bold().cyan(),
                available.len(),
                plural(available.len(), "entry", "entries"),
                header.display()
            );
        }
        _ => {
            let _ = writeln!(
                writer,
                "{} availability check skipped",
                "info:".bold().cyan()
            );
        }
    }

    let status = if result.outcome.is_valid() {
        format!("{} {}", SUCCESS_MARK.green(), "Methods validated".green())
    } else {
        format!("{} {}", FAILURE_MARK.red(), "Method validation failed".red())
    };
    let _ = writeln!(writer, "{}", status);
}
