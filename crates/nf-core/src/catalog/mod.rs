//! The content catalog: named pools of admissible NPC values.
//!
//! A catalog is loaded once (built-in tables or a YAML file) and read-only
//! afterwards. Weighted pools hold `{v, w}` entries; plain pools hold bare
//! strings. Order and duplicates are preserved as written.

mod load;
pub mod tables;

use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;

/// A candidate value paired with a relative selection weight.
///
/// Weights are validated at the load boundary: non-negative and finite.
/// A zero weight keeps the entry in the pool but it is never drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEntry {
    /// The candidate value.
    #[serde(rename = "v")]
    pub value: String,
    /// Relative weight, >= 0 and finite.
    #[serde(rename = "w")]
    pub weight: f64,
}

impl WeightedEntry {
    /// Create a new weighted entry.
    pub fn new(value: impl Into<String>, weight: f64) -> Self {
        Self {
            value: value.into(),
            weight,
        }
    }
}

/// An immutable snapshot of all content pools NPCs are drawn from.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Given names (uniform pool).
    pub names: Vec<String>,
    /// Races (weighted pool).
    pub races: Vec<WeightedEntry>,
    /// Adventuring classes (uniform pool).
    pub classes: Vec<String>,
    /// Age brackets (weighted pool).
    pub ages: Vec<WeightedEntry>,
    /// Physical traits (uniform pool).
    pub physical: Vec<String>,
    /// Personality traits (uniform pool).
    pub personality: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            names: tables::NAMES.iter().map(|s| (*s).to_string()).collect(),
            races: tables::RACES
                .iter()
                .map(|(v, w)| WeightedEntry::new(*v, *w))
                .collect(),
            classes: tables::CLASSES.iter().map(|s| (*s).to_string()).collect(),
            ages: tables::AGES
                .iter()
                .map(|(v, w)| WeightedEntry::new(*v, *w))
                .collect(),
            physical: tables::PHYSICAL.iter().map(|s| (*s).to_string()).collect(),
            personality: tables::PERSONALITY
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
        }
    }
}

impl Catalog {
    /// The built-in default catalog.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Load a catalog from a YAML file.
    ///
    /// Weights are coerced from numeric or string form and validated
    /// here; the rest of the crate never re-validates loaded data.
    pub fn from_path(path: &std::path::Path) -> CatalogResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Parse a catalog from YAML text. See [`Catalog::from_path`].
    pub fn from_yaml(text: &str) -> CatalogResult<Self> {
        load::parse(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sections_are_populated() {
        let catalog = Catalog::builtin();
        assert!(!catalog.names.is_empty());
        assert!(!catalog.races.is_empty());
        assert!(!catalog.classes.is_empty());
        assert!(!catalog.ages.is_empty());
        assert!(!catalog.physical.is_empty());
        assert!(!catalog.personality.is_empty());
    }

    #[test]
    fn builtin_matches_tables() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.names.len(), tables::NAMES.len());
        assert_eq!(catalog.races.len(), tables::RACES.len());
        assert_eq!(catalog.races[0].value, tables::RACES[0].0);
        assert_eq!(catalog.races[0].weight, tables::RACES[0].1);
    }

    #[test]
    fn weighted_entry_serde_shape() {
        let entry = WeightedEntry::new("human", 25.0);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"v":"human","w":25.0}"#);
        let back: WeightedEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }
}
