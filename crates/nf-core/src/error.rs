//! Error types for NPC generation.

use thiserror::Error;

/// Result type for roll operations.
pub type RollResult<T> = Result<T, RollError>;

/// Errors that can occur while drawing values from candidate pools.
#[derive(Debug, Error)]
pub enum RollError {
    /// A pick had nothing to choose from, e.g. because filters removed
    /// every candidate.
    #[error("no {0} candidates to pick from")]
    EmptyCandidates(&'static str),

    /// A candidate weight was negative, NaN, or infinite.
    #[error("invalid weight {weight} for {value:?}")]
    InvalidWeight {
        /// The candidate value carrying the bad weight.
        value: String,
        /// The offending weight.
        weight: f64,
    },

    /// Every candidate weight was zero, leaving the draw undefined.
    #[error("all candidate weights are zero")]
    ZeroWeightPool,
}

/// Result type for catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not valid YAML or does not match the
    /// expected section shapes.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A weight could not be coerced to a non-negative finite number.
    #[error("invalid weight {raw:?} for {value:?} in section '{section}'")]
    InvalidWeight {
        /// The catalog section holding the entry.
        section: &'static str,
        /// The entry value.
        value: String,
        /// The raw weight as written in the file.
        raw: String,
    },
}
