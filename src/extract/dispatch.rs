use std::sync::LazyLock;

use regex::Regex;

use crate::methods::MethodSequence;

pub const DEFAULT_START_MARKER: &str = "/* Start NVAPI methods */";
pub const DEFAULT_END_MARKER: &str = "/* End */";

// Matches a single call-like token with one identifier argument:
// `INSERT_AND_RETURN_WHEN_EQUALS(NvAPI_Initialize)`
static DISPATCH_ENTRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\w+\((\w+)\)").unwrap());

/// Comment lines delimiting the dispatch region, compared against trimmed lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMarkers {
    pub start: String,
    pub end: String,
}

impl RegionMarkers {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl Default for RegionMarkers {
    fn default() -> Self {
        Self::new(DEFAULT_START_MARKER, DEFAULT_END_MARKER)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegionState {
    /// Outside the region: only the start marker is recognized.
    Inactive,
    /// Inside the region: entries are captured until the end marker.
    Active,
}

/// Extract dispatched method names from the interface source.
///
/// Only lines between the start and end markers are considered. Marker lines
/// themselves never yield an entry. Re-entering the region appends to the same
/// sequence.
pub fn extract_dispatch_entries(source: &str, markers: &RegionMarkers) -> MethodSequence {
    let mut found = MethodSequence::new();
    let mut state = RegionState::Inactive;

    for line in source.lines() {
        let trimmed = line.trim();
        match state {
            RegionState::Inactive => {
                if trimmed == markers.start {
                    state = RegionState::Active;
                }
            }
            RegionState::Active => {
                // End marker wins over an entry match on the same line
                if trimmed == markers.end {
                    state = RegionState::Inactive;
                    continue;
                }
                if let Some(name) = DISPATCH_ENTRY_REGEX
                    .captures(line)
                    .and_then(|caps| caps.get(1))
                {
                    found.push(name.as_str());
                }
            }
        }
    }

    found
}
