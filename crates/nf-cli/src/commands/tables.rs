use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use nf_core::{Catalog, WeightedEntry};

pub fn run(section: Option<&str>, data: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(data)?;

    match section {
        None => summary(&catalog),
        Some("names") => plain("Name", &catalog.names),
        Some("races") => weighted("Race", &catalog.races),
        Some("classes") => plain("Class", &catalog.classes),
        Some("ages") => weighted("Age", &catalog.ages),
        Some("physical") => plain("Physical trait", &catalog.physical),
        Some("personality") => plain("Personality trait", &catalog.personality),
        Some(other) => {
            return Err(format!(
                "unknown section: \"{other}\". Use: names, races, classes, ages, physical, personality"
            ));
        }
    }

    Ok(())
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn summary(catalog: &Catalog) {
    let sections: [(&str, usize, bool); 6] = [
        ("names", catalog.names.len(), false),
        ("races", catalog.races.len(), true),
        ("classes", catalog.classes.len(), false),
        ("ages", catalog.ages.len(), true),
        ("physical", catalog.physical.len(), false),
        ("personality", catalog.personality.len(), false),
    ];

    let mut table = new_table();
    table.set_header(vec!["Section", "Entries", "Weighted"]);
    for (name, count, is_weighted) in sections {
        table.add_row(vec![
            name.to_string(),
            count.to_string(),
            if is_weighted { "yes" } else { "no" }.to_string(),
        ]);
    }

    println!("{table}");
}

fn plain(header: &str, values: &[String]) {
    let mut table = new_table();
    table.set_header(vec![header]);
    for value in values {
        table.add_row(vec![value.clone()]);
    }

    println!("{table}");
    println!();
    println!("  {} entries", values.len());
}

fn weighted(header: &str, entries: &[WeightedEntry]) {
    let mut table = new_table();
    table.set_header(vec![header, "Weight"]);
    for entry in entries {
        table.add_row(vec![entry.value.clone(), entry.weight.to_string()]);
    }

    println!("{table}");
    println!();
    println!("  {} entries", entries.len());
}
