// src/catalog/mod.rs
//! The catalog as read from the scraper's cache.
//!
//! - `item`: one record and its closed `ItemKind`.
//! - `price`: numeric extraction from display prices.
//! - `loader`: fail-open JSON reader.
//! - `group`: name-keyed buckets for cross-platform comparison.
//! - `pools`: the two tab pools (courses / products).
//!
//! Everything here is read-only once built; the shell and the sections only
//! borrow from it.

pub mod group;
pub mod item;
pub mod loader;
pub mod pools;
pub mod price;

pub use group::{Comparison, GroupedCatalog, group_by_name, normalize_key};
pub use item::{CatalogItem, ItemKind};
pub use loader::{load, try_load};
pub use pools::CategoryPools;
pub use price::numeric_price;
