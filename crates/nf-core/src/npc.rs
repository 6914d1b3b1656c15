//! The generated NPC record.

use serde::{Deserialize, Serialize};

/// One generated non-player character.
///
/// A pure value produced by the roller and consumed by the output
/// layer; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npc {
    /// Given name.
    pub name: String,
    /// Age bracket.
    pub age: String,
    /// Race.
    pub race: String,
    /// Adventuring class; `None` for commoners and low-detail rolls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Physical traits, in draw order. May repeat.
    pub physical: Vec<String>,
    /// Personality traits, in draw order. May repeat.
    pub personality: Vec<String>,
}

impl std::fmt::Display for Npc {
    /// Renders the fixed record layout. An absent class omits the
    /// `Class:` line entirely rather than printing a placeholder.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Age: {}", self.age)?;
        writeln!(f, "Race: {}", self.race)?;
        if let Some(class) = &self.class {
            writeln!(f, "Class: {class}")?;
        }
        writeln!(f, "Appearance: {}", self.physical.join(", "))?;
        write!(f, "Personality: {}", self.personality.join(", "))
    }
}
