//! Runs the three extractors over the input sources and validates the result.

use anyhow::Result;

use crate::{
    config::Config,
    extract::{extract_availability, extract_declarations, extract_dispatch_entries},
    methods::MethodSequence,
    sources::{SourcePaths, read_source},
    validate::{Outcome, validate},
};

/// Everything a run produced, kept together for reporting.
#[derive(Debug)]
pub struct CheckResult {
    pub sources: SourcePaths,
    /// Implemented methods, from the implementation sources.
    pub expected: MethodSequence,
    /// Dispatched methods, from the interface source.
    pub found: MethodSequence,
    /// Available methods, from the interface header. `None` when skipped.
    pub available: Option<MethodSequence>,
    pub outcome: Outcome,
}

/// Read every source in order, extract the method sequences and validate them.
///
/// Each source is read to completion before the next one is opened. The first
/// unreadable source aborts the run.
pub fn check_sources(sources: SourcePaths, config: &Config) -> Result<CheckResult> {
    let rule = config.declaration_rule()?;

    let mut expected = MethodSequence::new();
    for path in &sources.implementations {
        let source = read_source(path)?;
        expected.extend(extract_declarations(&source, &rule));
    }

    let source = read_source(&sources.interface)?;
    let found = extract_dispatch_entries(&source, &config.region_markers());

    let available = match &sources.header {
        Some(path) => Some(extract_availability(&read_source(path)?)),
        None => None,
    };

    let outcome = validate(
        &expected,
        &found,
        available.as_ref(),
        config.duplicate_check,
    );

    Ok(CheckResult {
        sources,
        expected,
        found,
        available,
        outcome,
    })
}
