// src/catalog/loader.rs
use std::{fs, path::Path};

use super::item::CatalogItem;
use crate::error::CatalogError;

/// Read the scraper cache. Any I/O or parse failure yields an empty catalog:
/// the storefront renders empty sections rather than an error screen.
pub fn load(path: &Path) -> Vec<CatalogItem> {
    match try_load(path) {
        Ok(items) => {
            logf!("Catalog: loaded {} items from {}", items.len(), path.display());
            items
        }
        Err(e) => {
            loge!("Catalog: {e}; continuing with an empty catalog");
            Vec::new()
        }
    }
}

/// Strict variant of [`load`] for callers that want the reason.
pub fn try_load(path: &Path) -> Result<Vec<CatalogItem>, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
