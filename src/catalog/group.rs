// src/catalog/group.rs
//
// Buckets of same-named items so one course/product can be compared across
// platforms. Keys keep first-seen order; a bucket keeps input order and
// duplicates.

use std::collections::HashMap;

use super::item::CatalogItem;

/// Grouping key: trimmed, lower-cased name.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Ordered mapping normalized name → items. Read-only after construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GroupedCatalog {
    groups: Vec<(String, Vec<CatalogItem>)>,
    index: HashMap<String, usize>,
}

pub fn group_by_name(items: &[CatalogItem]) -> GroupedCatalog {
    let mut grouped = GroupedCatalog::default();

    for item in items {
        let key = normalize_key(&item.name);
        match grouped.index.get(&key) {
            Some(&ix) => grouped.groups[ix].1.push(item.clone()),
            None => {
                grouped.index.insert(key.clone(), grouped.groups.len());
                grouped.groups.push((key, vec![item.clone()]));
            }
        }
    }

    logd!("Catalog: {} items in {} name groups", items.len(), grouped.len());
    grouped
}

/// A name that appears more than once, with its cheapest offer.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison<'a> {
    pub key: &'a str,
    pub items: &'a [CatalogItem],
    /// `None` when no item in the bucket has a readable price.
    pub cheapest: Option<&'a CatalogItem>,
}

impl GroupedCatalog {
    pub fn len(&self) -> usize { self.groups.len() }
    pub fn is_empty(&self) -> bool { self.groups.is_empty() }

    /// Lookup by raw name; the probe is normalized the same way as keys.
    pub fn get(&self, name: &str) -> Option<&[CatalogItem]> {
        self.index
            .get(&normalize_key(name))
            .map(|&ix| self.groups[ix].1.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CatalogItem])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// All items, bucket by bucket. This is the "recommended" order of the pools.
    pub fn flatten(&self) -> impl Iterator<Item = &CatalogItem> {
        self.groups.iter().flat_map(|(_, v)| v.iter())
    }

    /// Buckets with at least two items, in key order.
    pub fn comparisons(&self) -> Vec<Comparison<'_>> {
        self.iter()
            .filter(|(_, items)| items.len() > 1)
            .map(|(key, items)| {
                // First of equally cheap items wins.
                let cheapest = items
                    .iter()
                    .filter_map(|it| it.numeric_price().map(|p| (p, it)))
                    .fold(None::<(f64, &CatalogItem)>, |best, (p, it)| match best {
                        Some((bp, _)) if bp <= p => best,
                        _ => Some((p, it)),
                    })
                    .map(|(_, it)| it);
                Comparison { key, items, cheapest }
            })
            .collect()
    }
}
