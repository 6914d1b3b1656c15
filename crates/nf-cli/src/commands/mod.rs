pub mod check;
pub mod roll;
pub mod tables;

use std::path::Path;

use nf_core::Catalog;

/// Load the catalog from a YAML file, or fall back to the built-in
/// tables when no file was given.
fn load_catalog(data: Option<&Path>) -> Result<Catalog, String> {
    match data {
        Some(path) => Catalog::from_path(path)
            .map_err(|e| format!("cannot load catalog '{}': {e}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}
