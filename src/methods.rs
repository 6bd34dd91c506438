//! Ordered method-name sequences produced by the extractors.
//!
//! A [`MethodSequence`] keeps names in source order with duplicates intact.
//! Comparisons go through the set view; the ordered view is only used to
//! produce stable diagnostics.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// Method names extracted from one category of input, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MethodSequence(Vec<String>);

impl MethodSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    pub fn extend(&mut self, other: MethodSequence) {
        self.0.extend(other.0);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Deduplicated view used for all comparisons.
    pub fn to_set(&self) -> HashSet<&str> {
        self.iter().collect()
    }

    /// Distinct names in first-occurrence order.
    pub fn unique(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.iter().filter(|name| seen.insert(*name)).collect()
    }

    /// Occurrence count per name.
    pub fn counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for name in self.iter() {
            *counts.entry(name).or_insert(0) += 1;
        }
        counts
    }

    /// Names that occur more than once, with their counts, in first-occurrence order.
    pub fn duplicates(&self) -> Vec<(&str, usize)> {
        let counts = self.counts();
        self.unique()
            .into_iter()
            .filter_map(|name| {
                let count = counts[name];
                (count > 1).then_some((name, count))
            })
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for MethodSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
