use nf_core::roll::roll_npcs;
use nf_core::{FilterSpec, NpcFilters};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::RollArgs;

pub fn run(args: RollArgs) -> Result<(), String> {
    let catalog = super::load_catalog(args.data.as_deref())?;

    // One generator for the whole batch, seeded exactly once. The
    // effective seed goes to stderr so any run can be reproduced.
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    eprintln!("seed: {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    let filters = NpcFilters {
        ages: FilterSpec::new(args.ages, args.exclude_ages),
        classes: FilterSpec::new(args.classes, args.exclude_classes),
        races: FilterSpec::new(args.races, args.exclude_races),
    };

    let npcs = roll_npcs(
        args.number,
        args.detail,
        &filters,
        !args.commoners,
        &catalog,
        &mut rng,
    )
    .map_err(|e| e.to_string())?;

    if args.json {
        let text = serde_json::to_string_pretty(&npcs)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{text}");
    } else {
        for npc in &npcs {
            println!("{npc}\n");
        }
    }

    Ok(())
}
