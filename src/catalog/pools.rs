// src/catalog/pools.rs
use super::{group::GroupedCatalog, item::CatalogItem};
use crate::config::state::Tab;

/// The two fixed partitions the catalog list switches between.
/// Built from the flattened grouped catalog, so same-named items sit together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryPools {
    courses: Vec<CatalogItem>,
    products: Vec<CatalogItem>,
}

impl CategoryPools {
    pub fn from_grouped(grouped: &GroupedCatalog) -> Self {
        let mut pools = Self::default();
        let mut skipped = 0usize;

        for item in grouped.flatten() {
            match item.tab() {
                Some(Tab::Courses) => pools.courses.push(item.clone()),
                Some(Tab::Products) => pools.products.push(item.clone()),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            logd!("Catalog: {} items without a known type left out of both tabs", skipped);
        }
        pools
    }

    pub fn pool(&self, tab: Tab) -> &[CatalogItem] {
        match tab {
            Tab::Courses => &self.courses,
            Tab::Products => &self.products,
        }
    }

    pub fn courses(&self) -> &[CatalogItem] { &self.courses }
    pub fn products(&self) -> &[CatalogItem] { &self.products }

    /// Live count shown on the tab button.
    pub fn count(&self, tab: Tab) -> usize { self.pool(tab).len() }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty() && self.products.is_empty()
    }
}
