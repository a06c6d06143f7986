// src/sections.rs
//
// Marketing sections derived from the loaded catalog. Built once at start-up,
// independent of the list's filters.

use crate::catalog::{CatalogItem, CategoryPools};
use crate::config::consts::{COURSE_DEAL_BELOW, FEATURED_COUNT, POPULAR_COUNT, PRODUCT_DEAL_BELOW};
use crate::config::state::Tab;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sections {
    /// First items of the raw cache, whatever their kind.
    pub featured: Vec<CatalogItem>,
    pub popular_products: Vec<CatalogItem>,
    pub popular_courses: Vec<CatalogItem>,
}

impl Sections {
    pub fn build(raw: &[CatalogItem], pools: &CategoryPools) -> Self {
        Self {
            featured: raw.iter().take(FEATURED_COUNT).cloned().collect(),
            popular_products: pools.products().iter().take(POPULAR_COUNT).cloned().collect(),
            popular_courses: pools.courses().iter().take(POPULAR_COUNT).cloned().collect(),
        }
    }

    pub fn popular(&self, tab: Tab) -> &[CatalogItem] {
        match tab {
            Tab::Courses => &self.popular_courses,
            Tab::Products => &self.popular_products,
        }
    }
}

/// Deal badge rule for the popular strips: strictly below the tab's threshold.
pub fn is_deal(item: &CatalogItem, tab: Tab) -> bool {
    let below = match tab {
        Tab::Courses => COURSE_DEAL_BELOW,
        Tab::Products => PRODUCT_DEAL_BELOW,
    };
    item.numeric_price().is_some_and(|p| p < below)
}
