// src/error.rs
use std::{io, path::PathBuf};

use thiserror::Error;

/// Why the catalog cache could not be read. `catalog::load` swallows these;
/// `catalog::try_load` hands them out for callers that care.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("catalog {path} is not a JSON array of items: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Rejected filter/tab value coming from a text boundary (CLI flags).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFilterError {
    #[error("unknown tab `{0}` (expected cursos or productos)")]
    Tab(String),

    #[error("unknown platform `{0}` (expected all, udemy, coursera or producto)")]
    Platform(String),

    #[error("invalid price ceiling `{0}` (expected all or a number)")]
    PriceRange(String),

    #[error("unknown sort `{0}` (expected recommended, price-asc or price-desc)")]
    Sort(String),
}
