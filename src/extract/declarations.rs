use anyhow::{Context, Result};
use regex::Regex;

use crate::methods::MethodSequence;

pub const DEFAULT_RETURN_TYPE: &str = "NvAPI_Status";
pub const DEFAULT_CALLING_CONVENTION: &str = "__cdecl";

/// Matches `<ws>* <return type> <ws>+ <calling convention> <ws>+ <name>` at line start.
#[derive(Debug, Clone)]
pub struct DeclarationRule {
    regex: Regex,
}

impl DeclarationRule {
    pub fn new(return_type: &str, calling_convention: &str) -> Result<Self> {
        let pattern = format!(
            r"^\s*{}\s+{}\s+(\w+)",
            regex::escape(return_type),
            regex::escape(calling_convention)
        );
        let regex = Regex::new(&pattern)
            .with_context(|| format!("Failed to build declaration pattern: {}", pattern))?;
        Ok(Self { regex })
    }

    fn capture<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.regex
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl Default for DeclarationRule {
    fn default() -> Self {
        // Both tokens are plain identifiers, so the escaped pattern always compiles.
        Self::new(DEFAULT_RETURN_TYPE, DEFAULT_CALLING_CONVENTION)
            .expect("default declaration pattern is valid")
    }
}

/// Extract implemented method names from one implementation source.
pub fn extract_declarations(source: &str, rule: &DeclarationRule) -> MethodSequence {
    source.lines().filter_map(|line| rule.capture(line)).collect()
}
