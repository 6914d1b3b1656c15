//! Strict YAML loading for catalog files.
//!
//! The on-disk format mirrors the in-memory shape: `names`, `races`,
//! `classes`, `age`, `physical`, `personality` sections, with weighted
//! sections holding `{v, w}` maps. Weights may be written as numbers or
//! numeric strings; coercion and validation happen here, once.

use serde::Deserialize;

use super::{Catalog, WeightedEntry};
use crate::error::{CatalogError, CatalogResult};

/// A weight as written in the file: plain number or quoted string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawWeight {
    Number(f64),
    Text(String),
}

impl RawWeight {
    fn raw(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    v: String,
    w: RawWeight,
}

/// The on-disk catalog shape. Unknown sections are rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    names: Vec<String>,
    races: Vec<RawEntry>,
    classes: Vec<String>,
    age: Vec<RawEntry>,
    physical: Vec<String>,
    personality: Vec<String>,
}

/// Coerce one raw entry, rejecting anything that is not a non-negative
/// finite number.
fn coerce(section: &'static str, entry: RawEntry) -> CatalogResult<WeightedEntry> {
    let raw = entry.w.raw();
    let weight = match &entry.w {
        RawWeight::Number(n) => *n,
        RawWeight::Text(s) => match s.trim().parse::<f64>() {
            Ok(n) => n,
            Err(_) => {
                return Err(CatalogError::InvalidWeight {
                    section,
                    value: entry.v,
                    raw,
                });
            }
        },
    };
    if !weight.is_finite() || weight < 0.0 {
        return Err(CatalogError::InvalidWeight {
            section,
            value: entry.v,
            raw,
        });
    }
    Ok(WeightedEntry::new(entry.v, weight))
}

fn coerce_section(
    section: &'static str,
    entries: Vec<RawEntry>,
) -> CatalogResult<Vec<WeightedEntry>> {
    entries.into_iter().map(|e| coerce(section, e)).collect()
}

/// Parse and validate catalog YAML text.
pub(super) fn parse(text: &str) -> CatalogResult<Catalog> {
    let raw: RawCatalog = serde_yaml_ng::from_str(text)?;
    Ok(Catalog {
        names: raw.names,
        races: coerce_section("races", raw.races)?,
        classes: raw.classes,
        ages: coerce_section("age", raw.age)?,
        physical: raw.physical,
        personality: raw.personality,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
names: [Sirius, Yve]
races:
  - {v: human, w: 10}
  - {v: dragonborn, w: 1.5}
  - {v: kobold, w: "4.2"}
  - {v: aasimar, w: "0"}
classes: [bard, fighter]
age:
  - {v: young, w: 2}
  - {v: old, w: "1"}
physical: [tall, spots]
personality: [funny, rude]
"#;

    #[test]
    fn parses_minimal_catalog() {
        let catalog = parse(MINIMAL).unwrap();
        assert_eq!(catalog.names, vec!["Sirius", "Yve"]);
        assert_eq!(catalog.classes, vec!["bard", "fighter"]);
        assert_eq!(catalog.physical.len(), 2);
        assert_eq!(catalog.personality.len(), 2);
    }

    #[test]
    fn coerces_numeric_and_string_weights() {
        let catalog = parse(MINIMAL).unwrap();
        assert_eq!(catalog.races[0].weight, 10.0);
        assert_eq!(catalog.races[1].weight, 1.5);
        assert_eq!(catalog.races[2].weight, 4.2);
        assert_eq!(catalog.races[3].weight, 0.0);
        assert_eq!(catalog.ages[0].weight, 2.0);
        assert_eq!(catalog.ages[1].weight, 1.0);
    }

    #[test]
    fn rejects_non_numeric_weight() {
        let text = MINIMAL.replace("w: 10", "w: heavy");
        let err = parse(&text).unwrap_err();
        match err {
            CatalogError::InvalidWeight {
                section,
                value,
                raw,
            } => {
                assert_eq!(section, "races");
                assert_eq!(value, "human");
                assert_eq!(raw, "heavy");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_negative_weight() {
        let text = MINIMAL.replace("w: 10", "w: -1");
        assert!(matches!(
            parse(&text).unwrap_err(),
            CatalogError::InvalidWeight { section: "races", .. }
        ));
    }

    #[test]
    fn rejects_nan_and_infinite_weights() {
        let nan = MINIMAL.replace("w: 10", "w: .nan");
        assert!(matches!(
            parse(&nan).unwrap_err(),
            CatalogError::InvalidWeight { .. }
        ));
        let inf = MINIMAL.replace("w: 10", "w: \"inf\"");
        assert!(matches!(
            parse(&inf).unwrap_err(),
            CatalogError::InvalidWeight { .. }
        ));
    }

    #[test]
    fn rejects_missing_section() {
        let text = MINIMAL.replace("classes: [bard, fighter]", "");
        assert!(matches!(parse(&text).unwrap_err(), CatalogError::Parse(_)));
    }

    #[test]
    fn rejects_unknown_section() {
        let text = format!("{MINIMAL}\nalignment: [lawful]");
        assert!(matches!(parse(&text).unwrap_err(), CatalogError::Parse(_)));
    }

    #[test]
    fn string_weights_are_trimmed() {
        let text = MINIMAL.replace("w: \"4.2\"", "w: \" 4.2 \"");
        let catalog = parse(&text).unwrap();
        assert_eq!(catalog.races[2].weight, 4.2);
    }
}
