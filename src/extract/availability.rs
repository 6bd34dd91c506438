use std::sync::LazyLock;

use regex::Regex;

use crate::methods::MethodSequence;

// Matches one interface table row: `{ "NvAPI_Initialize", 0x0150e828 },`
static TABLE_ENTRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*\{ "(\w+)", \w+ \},$"#).unwrap());

/// Extract available method names from the interface table header.
///
/// Rows must sit on a single line in the exact `{ "Name", id },` shape;
/// anything else is ignored.
pub fn extract_availability(source: &str) -> MethodSequence {
    source
        .lines()
        .filter_map(|line| TABLE_ENTRY_REGEX.captures(line))
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        .collect()
}
