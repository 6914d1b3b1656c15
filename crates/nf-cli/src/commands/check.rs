use std::path::Path;

use colored::Colorize;
use nf_core::Catalog;

pub fn run(file: &Path) -> Result<(), String> {
    let catalog =
        Catalog::from_path(file).map_err(|e| format!("'{}': {e}", file.display()))?;

    println!(
        "  {} All checks passed for '{}'.",
        "OK".green().bold(),
        file.display()
    );
    println!(
        "  {} names, {} races, {} classes, {} ages, {} physical, {} personality",
        catalog.names.len(),
        catalog.races.len(),
        catalog.classes.len(),
        catalog.ages.len(),
        catalog.physical.len(),
        catalog.personality.len(),
    );

    Ok(())
}
