//! Substring allow/deny filtering of candidate pools.
//!
//! A pool is narrowed in two steps: the allow-step collects, for each
//! allowed term in the order given, every candidate containing that term
//! (so a candidate matching several terms appears several times), then
//! the deny-step removes every candidate containing any disallowed term.
//! Matching is case-sensitive containment; filtering itself never fails.

use serde::{Deserialize, Serialize};

use crate::catalog::WeightedEntry;

/// Allow/deny substring lists narrowing one candidate pool.
///
/// An empty `allowed` list means "no restriction"; an empty `disallowed`
/// list means "no exclusion".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Substrings a candidate must contain (any of them) to be kept.
    pub allowed: Vec<String>,
    /// Substrings that remove a candidate from the result.
    pub disallowed: Vec<String>,
}

impl FilterSpec {
    /// Create a spec from allow and deny term lists.
    pub fn new(allowed: Vec<String>, disallowed: Vec<String>) -> Self {
        Self {
            allowed,
            disallowed,
        }
    }

    /// True when the spec restricts nothing.
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty() && self.disallowed.is_empty()
    }
}

/// Per-category filters for the filterable pools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcFilters {
    /// Filter applied to the age pool.
    pub ages: FilterSpec,
    /// Filter applied to the class pool.
    pub classes: FilterSpec,
    /// Filter applied to the race pool.
    pub races: FilterSpec,
}

/// Shared filter body; `key` extracts the comparison string.
fn filter_by<T, F>(candidates: &[T], spec: &FilterSpec, key: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> &str,
{
    if spec.is_empty() {
        return candidates.to_vec();
    }

    let mut kept: Vec<T> = if spec.allowed.is_empty() {
        candidates.to_vec()
    } else {
        let mut kept = Vec::new();
        for term in &spec.allowed {
            kept.extend(
                candidates
                    .iter()
                    .filter(|c| key(c).contains(term.as_str()))
                    .cloned(),
            );
        }
        kept
    };

    for term in &spec.disallowed {
        kept.retain(|c| !key(c).contains(term.as_str()));
    }
    kept
}

/// Filter a plain string pool by the given spec.
pub fn filter_plain(candidates: &[String], spec: &FilterSpec) -> Vec<String> {
    filter_by(candidates, spec, |s| s.as_str())
}

/// Filter a weighted pool by the given spec, comparing entry values.
pub fn filter_weighted(candidates: &[WeightedEntry], spec: &FilterSpec) -> Vec<WeightedEntry> {
    filter_by(candidates, spec, |e| e.value.as_str())
}
