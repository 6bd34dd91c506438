//! Cross-reference validation of the three method sequences.
//!
//! Two checks run in order and the first failure wins:
//!
//! 1. Dispatch completeness: every implemented method is dispatched by the
//!    lookup function, with matching entry counts.
//! 2. Availability coverage: every dispatched method has a row in the
//!    interface table. Skipped when no table was supplied.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::methods::MethodSequence;

/// How strictly duplicate names are compared between declarations and dispatch entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateCheck {
    /// Raw sequence lengths must be equal and match the number of names
    /// shared by both sides. Any duplicated name fails.
    #[default]
    Length,
    /// Every name must occur the same number of times on both sides.
    Multiset,
}

/// A name that occurs more than once in one sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Duplicate {
    pub name: String,
    pub count: usize,
}

/// Details for a failed dispatch completeness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchMismatch {
    pub expected_count: usize,
    pub found_count: usize,
    /// Implemented but not dispatched.
    pub not_dispatched: Vec<String>,
    /// Dispatched but not implemented.
    pub not_implemented: Vec<String>,
    pub duplicate_declarations: Vec<Duplicate>,
    pub duplicate_dispatch_entries: Vec<Duplicate>,
}

/// Details for a failed availability coverage check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityMismatch {
    /// Dispatched but missing from the interface table.
    pub unavailable: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Valid,
    DispatchMismatch(DispatchMismatch),
    AvailabilityMismatch(AvailabilityMismatch),
}

impl Outcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    /// Stable identifier used in machine-readable output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Valid => "valid",
            Outcome::DispatchMismatch(_) => "dispatch-mismatch",
            Outcome::AvailabilityMismatch(_) => "availability-mismatch",
        }
    }
}

/// Validate declarations against dispatch entries and, when given, the interface table.
pub fn validate(
    expected: &MethodSequence,
    found: &MethodSequence,
    available: Option<&MethodSequence>,
    duplicate_check: DuplicateCheck,
) -> Outcome {
    if !dispatch_complete(expected, found, duplicate_check) {
        return Outcome::DispatchMismatch(DispatchMismatch::between(expected, found));
    }

    if let Some(available) = available {
        let table = available.to_set();
        let unavailable: Vec<String> = found
            .unique()
            .into_iter()
            .filter(|name| !table.contains(name))
            .map(String::from)
            .collect();
        if !unavailable.is_empty() {
            return Outcome::AvailabilityMismatch(AvailabilityMismatch { unavailable });
        }
    }

    Outcome::Valid
}

fn dispatch_complete(
    expected: &MethodSequence,
    found: &MethodSequence,
    duplicate_check: DuplicateCheck,
) -> bool {
    match duplicate_check {
        DuplicateCheck::Length => {
            // Shared distinct names must cover the raw declaration count, so any
            // duplicate or undeclared entry fails.
            let shared = expected.to_set().intersection(&found.to_set()).count();
            expected.len() == found.len() && shared == expected.len()
        }
        DuplicateCheck::Multiset => expected.counts() == found.counts(),
    }
}

impl DispatchMismatch {
    fn between(expected: &MethodSequence, found: &MethodSequence) -> Self {
        Self {
            expected_count: expected.len(),
            found_count: found.len(),
            not_dispatched: difference(expected, &found.to_set()),
            not_implemented: difference(found, &expected.to_set()),
            duplicate_declarations: duplicates(expected),
            duplicate_dispatch_entries: duplicates(found),
        }
    }
}

fn difference(from: &MethodSequence, other: &HashSet<&str>) -> Vec<String> {
    from.unique()
        .into_iter()
        .filter(|name| !other.contains(name))
        .map(String::from)
        .collect()
}

fn duplicates(seq: &MethodSequence) -> Vec<Duplicate> {
    seq.duplicates()
        .into_iter()
        .map(|(name, count)| Duplicate {
            name: name.to_string(),
            count,
        })
        .collect()
}
