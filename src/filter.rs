// src/filter.rs
//
// Filter state and the filter/sort stages of the catalog pipeline.
//
// Stage order is fixed; each stage narrows the previous one and only the sort
// stage reorders:
//   search (title contains, case-insensitive)
//   → platform
//   → price ceiling (unpriced items dropped)
//   → sort (stable; unpriced items last in both directions)
//
// Everything works on positions into the pool so views never clone items.

use std::{cmp::Ordering, fmt, str::FromStr};

use crate::catalog::{CatalogItem, ItemKind};
use crate::error::ParseFilterError;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PriceRange {
    #[default]
    Any,
    /// Inclusive ceiling.
    UpTo(f64),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlatformFilter {
    #[default]
    All,
    Only(ItemKind),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    Recommended,
    PriceAsc,
    PriceDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Recommended, SortMode::PriceAsc, SortMode::PriceDesc];

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Recommended => "Recomendados",
            SortMode::PriceAsc => "Precio: Menor a Mayor",
            SortMode::PriceDesc => "Precio: Mayor a Menor",
        }
    }
}

impl PriceRange {
    pub fn label(self) -> String {
        match self {
            PriceRange::Any => s!("Cualquier precio"),
            PriceRange::UpTo(c) => format!("Hasta ${c}"),
        }
    }

    /// Whether a numeric price passes. Unpriced items never pass a ceiling.
    pub fn admits(self, price: Option<f64>) -> bool {
        match self {
            PriceRange::Any => true,
            PriceRange::UpTo(ceiling) => price.is_some_and(|p| p <= ceiling),
        }
    }
}

impl PlatformFilter {
    pub fn label(self) -> &'static str {
        match self {
            PlatformFilter::All => "Todas las plataformas",
            PlatformFilter::Only(kind) => kind.platform_label(),
        }
    }

    pub fn admits(self, kind: Option<ItemKind>) -> bool {
        match self {
            PlatformFilter::All => true,
            PlatformFilter::Only(want) => kind == Some(want),
        }
    }
}

/// Price ceiling, platform and sort mode. Search text lives beside it in the
/// shell state, not in here.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FilterState {
    pub price_range: PriceRange,
    pub platform: PlatformFilter,
    pub sort: SortMode,
}

/// Run the filter and sort stages over `pool`; returns kept positions in
/// display order.
pub fn filter_indices(pool: &[CatalogItem], search: &str, filters: &FilterState) -> Vec<usize> {
    let needle = search.to_lowercase();

    let mut kept: Vec<(usize, Option<f64>)> = pool
        .iter()
        .enumerate()
        .filter(|(_, item)| needle.is_empty() || item.title.to_lowercase().contains(&needle))
        .filter(|(_, item)| filters.platform.admits(item.kind))
        .map(|(ix, item)| (ix, item.numeric_price()))
        .filter(|&(_, price)| filters.price_range.admits(price))
        .collect();

    match filters.sort {
        SortMode::Recommended => {}
        SortMode::PriceAsc => kept.sort_by(|a, b| cmp_prices(a.1, b.1, false)),
        SortMode::PriceDesc => kept.sort_by(|a, b| cmp_prices(a.1, b.1, true)),
    }

    kept.into_iter().map(|(ix, _)| ix).collect()
}

/// Total order used by the price sorts: priced items by value, then every
/// unpriced item. Equal keys keep their order (callers use a stable sort).
pub fn cmp_prices(a: Option<f64>, b: Option<f64>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            if descending { ord.reverse() } else { ord }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/* ---------- text boundary (CLI flags, select values) ---------- */

impl FromStr for PriceRange {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.eq_ignore_ascii_case("all") {
            return Ok(PriceRange::Any);
        }
        match t.parse::<f64>() {
            Ok(c) if !c.is_nan() => Ok(PriceRange::UpTo(c)),
            _ => Err(ParseFilterError::PriceRange(s!(s))),
        }
    }
}

impl FromStr for PlatformFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(PlatformFilter::All),
            "udemy" => Ok(PlatformFilter::Only(ItemKind::Udemy)),
            "coursera" => Ok(PlatformFilter::Only(ItemKind::Coursera)),
            "producto" | "amazon" => Ok(PlatformFilter::Only(ItemKind::Producto)),
            _ => Err(ParseFilterError::Platform(s!(s))),
        }
    }
}

impl FromStr for SortMode {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recommended" => Ok(SortMode::Recommended),
            "price-asc" => Ok(SortMode::PriceAsc),
            "price-desc" => Ok(SortMode::PriceDesc),
            _ => Err(ParseFilterError::Sort(s!(s))),
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceRange::Any => f.write_str("all"),
            PriceRange::UpTo(c) => write!(f, "{c}"),
        }
    }
}

impl fmt::Display for PlatformFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformFilter::All => f.write_str("all"),
            PlatformFilter::Only(kind) => f.write_str(kind.as_str()),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortMode::Recommended => "recommended",
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
        })
    }
}
