// src/view.rs
//
// Zero-copy views over a category pool.
//
// - CatalogView: the filtered + sorted projection the list renders, held as
//                positions into the pool (the pool itself is never touched).
// - PageView:    one page of a CatalogView.

use crate::catalog::CatalogItem;
use crate::filter::{FilterState, filter_indices};
use crate::paginate::{page_range, total_pages};

#[derive(Clone, Debug)]
pub struct CatalogView<'a> {
    /// Positions of kept items in the pool, display order.
    pub item_ix: Vec<usize>,
    pool: &'a [CatalogItem],
}

impl<'a> CatalogView<'a> {
    /// Run the pipeline over `pool`.
    pub fn from_pool(pool: &'a [CatalogItem], search: &str, filters: &FilterState) -> Self {
        Self { item_ix: filter_indices(pool, search, filters), pool }
    }

    /// Rebuild from positions computed earlier (cache hit path).
    pub fn from_indices(pool: &'a [CatalogItem], item_ix: Vec<usize>) -> Self {
        Self { item_ix, pool }
    }

    pub fn len(&self) -> usize { self.item_ix.len() }
    pub fn is_empty(&self) -> bool { self.item_ix.is_empty() }

    /// Borrow one item by projected position.
    pub fn item(&self, i: usize) -> Option<&'a CatalogItem> {
        self.item_ix.get(i).and_then(|&ix| self.pool.get(ix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a CatalogItem> + '_ {
        self.item_ix.iter().filter_map(|&ix| self.pool.get(ix))
    }

    pub fn total_pages(&self) -> usize { total_pages(self.len()) }

    /// Items on 1-based `page`; empty when the page is out of range.
    pub fn page(&self, page: usize) -> PageView<'a> {
        let range = page_range(self.len(), page);
        let items = self.item_ix[range]
            .iter()
            .filter_map(|&ix| self.pool.get(ix))
            .collect();
        PageView { number: page, total_pages: self.total_pages(), total_items: self.len(), items }
    }

    /// Materialize owned items (CLI/export boundaries).
    pub fn to_owned_items(&self) -> Vec<CatalogItem> {
        self.iter().cloned().collect()
    }
}

/// One rendered page plus the numbers the pager needs.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView<'a> {
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items: Vec<&'a CatalogItem>,
}

impl PageView<'_> {
    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// "Página X de Y"
    pub fn readout(&self) -> String {
        format!("Página {} de {}", self.number, self.total_pages)
    }
}
