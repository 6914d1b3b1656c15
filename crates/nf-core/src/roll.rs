//! Drawing NPCs from candidate pools.
//!
//! All randomness flows through an explicitly passed [`StdRng`], so a
//! fixed seed reproduces a batch exactly. Each NPC consumes the rng in a
//! fixed order: age, class, name, race, physical traits in index order,
//! personality traits in index order.

use rand::Rng;
use rand::rngs::StdRng;

use crate::catalog::{Catalog, WeightedEntry};
use crate::error::{RollError, RollResult};
use crate::filter::{self, NpcFilters};
use crate::npc::Npc;

/// Draw one value with probability proportional to its weight.
///
/// `what` names the pool for error reporting. Zero-weight entries are
/// never drawn. A pool whose weights sum to zero is rejected with
/// [`RollError::ZeroWeightPool`] rather than falling back to a uniform
/// draw; a weight that is negative, NaN, or infinite is rejected with
/// [`RollError::InvalidWeight`].
pub fn weighted_pick<'a>(
    candidates: &'a [WeightedEntry],
    what: &'static str,
    rng: &mut StdRng,
) -> RollResult<&'a str> {
    if candidates.is_empty() {
        return Err(RollError::EmptyCandidates(what));
    }

    let mut total = 0.0;
    for entry in candidates {
        if !entry.weight.is_finite() || entry.weight < 0.0 {
            return Err(RollError::InvalidWeight {
                value: entry.value.clone(),
                weight: entry.weight,
            });
        }
        total += entry.weight;
    }
    if total <= 0.0 {
        return Err(RollError::ZeroWeightPool);
    }

    let mut roll = rng.random_range(0.0..total);
    for entry in candidates {
        if roll < entry.weight {
            return Ok(&entry.value);
        }
        roll -= entry.weight;
    }

    // Float accumulation can leave the roll a sliver past the last
    // bucket; it belongs to the last positively weighted entry.
    match candidates.iter().rfind(|e| e.weight > 0.0) {
        Some(entry) => Ok(&entry.value),
        None => Err(RollError::ZeroWeightPool),
    }
}

/// Draw one value uniformly. `what` names the pool for error reporting.
pub fn uniform_pick<'a>(
    candidates: &'a [String],
    what: &'static str,
    rng: &mut StdRng,
) -> RollResult<&'a str> {
    if candidates.is_empty() {
        return Err(RollError::EmptyCandidates(what));
    }
    Ok(&candidates[rng.random_range(0..candidates.len())])
}

/// Roll a single NPC from pre-filtered pools.
///
/// `detail` sets how many physical and personality traits are drawn
/// (with replacement — traits may repeat). A class is only drawn when
/// `detail >= 2` and the class pool is non-empty; otherwise the NPC is
/// a commoner. Draw order is fixed: age, class, name, race, physical
/// traits, personality traits.
pub fn roll_npc(
    detail: usize,
    ages: &[WeightedEntry],
    classes: &[String],
    races: &[WeightedEntry],
    catalog: &Catalog,
    rng: &mut StdRng,
) -> RollResult<Npc> {
    let age = weighted_pick(ages, "age", rng)?.to_string();

    let class = if detail >= 2 && !classes.is_empty() {
        Some(uniform_pick(classes, "class", rng)?.to_string())
    } else {
        None
    };

    let name = uniform_pick(&catalog.names, "name", rng)?.to_string();
    let race = weighted_pick(races, "race", rng)?.to_string();

    let mut physical = Vec::with_capacity(detail);
    for _ in 0..detail {
        physical.push(uniform_pick(&catalog.physical, "physical trait", rng)?.to_string());
    }

    let mut personality = Vec::with_capacity(detail);
    for _ in 0..detail {
        personality.push(uniform_pick(&catalog.personality, "personality trait", rng)?.to_string());
    }

    Ok(Npc {
        name,
        age,
        race,
        class,
        physical,
        personality,
    })
}

/// Roll a batch of NPCs.
///
/// Filters are applied once per batch; every NPC in the batch draws
/// from the same narrowed pools. When `include_classes` is false the
/// class pool is empty and every NPC comes out a commoner. A `count`
/// of zero yields an empty batch.
pub fn roll_npcs(
    count: usize,
    detail: usize,
    filters: &NpcFilters,
    include_classes: bool,
    catalog: &Catalog,
    rng: &mut StdRng,
) -> RollResult<Vec<Npc>> {
    let ages = filter::filter_weighted(&catalog.ages, &filters.ages);
    let classes = if include_classes {
        filter::filter_plain(&catalog.classes, &filters.classes)
    } else {
        Vec::new()
    };
    let races = filter::filter_weighted(&catalog.races, &filters.races);

    let mut npcs = Vec::with_capacity(count);
    for _ in 0..count {
        npcs.push(roll_npc(detail, &ages, &classes, &races, catalog, rng)?);
    }
    Ok(npcs)
}
