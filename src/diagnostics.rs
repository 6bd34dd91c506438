//! Diagnostic texts for failed runs.
//!
//! Each outcome has one fixed headline. Notes name the offending methods
//! and never change the outcome.

use crate::{
    config::Config,
    validate::{AvailabilityMismatch, DispatchMismatch, Duplicate, Outcome},
};

pub const USAGE_MESSAGE: &str = "Method validation failed due to invalid usage. \
     Usage: validate-methods <implementation1.cpp> [implementation2.cpp] <interface.cpp> <interface.h>";

/// Fixed headline for a failed outcome, `None` when valid.
pub fn headline(outcome: &Outcome, config: &Config) -> Option<String> {
    match outcome {
        Outcome::Valid => None,
        Outcome::DispatchMismatch(_) => Some(format!(
            "Method validation failed. \
             Please make sure that all implemented NVAPI methods are listed in the `{}` function.",
            config.dispatch_function
        )),
        Outcome::AvailabilityMismatch(_) => Some(format!(
            "Method validation failed. \
             Please make sure that all implemented NVAPI methods \
             correspond to available methods in the `{}` struct.",
            config.availability_table
        )),
    }
}

/// Notes naming the methods behind a failed outcome.
pub fn notes(outcome: &Outcome) -> Vec<String> {
    match outcome {
        Outcome::Valid => Vec::new(),
        Outcome::DispatchMismatch(mismatch) => dispatch_notes(mismatch),
        Outcome::AvailabilityMismatch(mismatch) => availability_notes(mismatch),
    }
}

fn dispatch_notes(mismatch: &DispatchMismatch) -> Vec<String> {
    let mut notes = Vec::new();

    if !mismatch.not_dispatched.is_empty() {
        notes.push(format!(
            "implemented but not dispatched: {}",
            mismatch.not_dispatched.join(", ")
        ));
    }
    if !mismatch.not_implemented.is_empty() {
        notes.push(format!(
            "dispatched but not implemented: {}",
            mismatch.not_implemented.join(", ")
        ));
    }
    if !mismatch.duplicate_declarations.is_empty() {
        notes.push(format!(
            "declared more than once: {}",
            format_duplicates(&mismatch.duplicate_declarations)
        ));
    }
    if !mismatch.duplicate_dispatch_entries.is_empty() {
        notes.push(format!(
            "dispatched more than once: {}",
            format_duplicates(&mismatch.duplicate_dispatch_entries)
        ));
    }
    if mismatch.expected_count != mismatch.found_count {
        notes.push(format!(
            "{} implemented {}, {} dispatch {}",
            mismatch.expected_count,
            plural(mismatch.expected_count, "method", "methods"),
            mismatch.found_count,
            plural(mismatch.found_count, "entry", "entries"),
        ));
    }

    notes
}

fn availability_notes(mismatch: &AvailabilityMismatch) -> Vec<String> {
    vec![format!(
        "dispatched but not in the interface table: {}",
        mismatch.unavailable.join(", ")
    )]
}

fn format_duplicates(duplicates: &[Duplicate]) -> String {
    duplicates
        .iter()
        .map(|d| format!("{} (x{})", d.name, d.count))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
