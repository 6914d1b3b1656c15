//! Built-in content tables for the default catalog.
//!
//! Weighted tables pair each value with a relative weight; common
//! entries carry larger weights so a plain roll leans towards the
//! kind of NPC a party actually meets at the tavern.

/// Given names (36 entries).
pub const NAMES: &[&str] = &[
    "Adrik",
    "Alia",
    "Baern",
    "Bree",
    "Cora",
    "Darrak",
    "Eberk",
    "Elra",
    "Fargrim",
    "Gilda",
    "Gunnloda",
    "Halia",
    "Ilde",
    "Jeb",
    "Kethra",
    "Lavinia",
    "Lief",
    "Mika",
    "Mirabel",
    "Nedda",
    "Orsik",
    "Perrin",
    "Quelline",
    "Ryfar",
    "Seraphina",
    "Shandri",
    "Sirius",
    "Tana",
    "Thokk",
    "Ulfgar",
    "Vondal",
    "Wilhelmina",
    "Xanaphia",
    "Yve",
    "Zasheir",
    "Artin",
];

/// Races with relative weights (17 entries).
pub const RACES: &[(&str, f64)] = &[
    ("human", 25.0),
    ("elf (high)", 7.0),
    ("elf (wood)", 7.0),
    ("elf (drow)", 2.0),
    ("dwarf (hill)", 8.0),
    ("dwarf (mountain)", 8.0),
    ("halfling (lightfoot)", 6.0),
    ("halfling (stout)", 5.0),
    ("gnome (forest)", 4.0),
    ("gnome (rock)", 4.0),
    ("half-elf", 6.0),
    ("half-orc", 5.0),
    ("tiefling", 3.0),
    ("dragonborn", 3.0),
    ("aasimar", 1.0),
    ("goblin", 2.0),
    ("kobold", 1.0),
];

/// Adventuring classes (12 entries).
pub const CLASSES: &[&str] = &[
    "barbarian",
    "bard",
    "cleric",
    "druid",
    "fighter",
    "monk",
    "paladin",
    "ranger",
    "rogue",
    "sorcerer",
    "warlock",
    "wizard",
];

/// Age brackets with relative weights (6 entries).
pub const AGES: &[(&str, f64)] = &[
    ("very young", 5.0),
    ("young", 20.0),
    ("middle aged", 40.0),
    ("old", 20.0),
    ("very old", 10.0),
    ("ancient", 1.0),
];

/// Physical traits (24 entries).
pub const PHYSICAL: &[&str] = &[
    "tall",
    "short",
    "sinewy",
    "spots",
    "scarred face",
    "missing ear",
    "leg missing",
    "hook instead of a hand",
    "braided beard",
    "tattooed arms",
    "walks with a limp",
    "golden tooth",
    "piercing eyes",
    "weathered skin",
    "crooked nose",
    "shaved head",
    "burn marks",
    "subtle circlet",
    "patched cloak",
    "calloused hands",
    "hunched posture",
    "milky eye",
    "jeweled rings",
    "ink-stained fingers",
];

/// Personality traits (24 entries).
pub const PERSONALITY: &[&str] = &[
    "funny",
    "rude",
    "tense",
    "opportunistic",
    "articulate",
    "desperate",
    "cheerful",
    "suspicious",
    "generous",
    "greedy",
    "superstitious",
    "blunt",
    "curious",
    "cowardly",
    "boastful",
    "patient",
    "forgetful",
    "devout",
    "cynical",
    "loyal",
    "hot-tempered",
    "soft-spoken",
    "scheming",
    "honest",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_sizes() {
        assert_eq!(NAMES.len(), 36);
        assert_eq!(RACES.len(), 17);
        assert_eq!(CLASSES.len(), 12);
        assert_eq!(AGES.len(), 6);
        assert_eq!(PHYSICAL.len(), 24);
        assert_eq!(PERSONALITY.len(), 24);
    }

    #[test]
    fn weights_are_valid() {
        for (value, weight) in RACES.iter().chain(AGES.iter()) {
            assert!(
                weight.is_finite() && *weight >= 0.0,
                "bad weight {weight} for {value}"
            );
        }
    }

    #[test]
    fn weighted_tables_have_positive_total() {
        assert!(RACES.iter().map(|(_, w)| w).sum::<f64>() > 0.0);
        assert!(AGES.iter().map(|(_, w)| w).sum::<f64>() > 0.0);
    }

    #[test]
    fn age_brackets_nest_as_substrings() {
        // "young" matches both young brackets, "old" both old ones.
        let ages: Vec<&str> = AGES.iter().map(|(v, _)| *v).collect();
        assert!(ages.contains(&"young"));
        assert!(ages.contains(&"very young"));
        assert!(ages.contains(&"old"));
        assert!(ages.contains(&"very old"));
    }
}
