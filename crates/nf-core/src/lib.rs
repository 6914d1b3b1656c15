//! Core NPC generation for Nebenfigur.
//!
//! Provides the content catalog (built-in tables plus a YAML loader),
//! substring allow/deny filtering of candidate pools, and the roller that
//! draws complete NPCs from a seeded random number generator.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod npc;
pub mod roll;

pub use catalog::{Catalog, WeightedEntry};
pub use error::{CatalogError, CatalogResult, RollError, RollResult};
pub use filter::{FilterSpec, NpcFilters};
pub use npc::Npc;
