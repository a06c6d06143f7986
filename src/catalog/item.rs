// src/catalog/item.rs
use serde::{Deserialize, Serialize};

use super::price::numeric_price;
use crate::config::state::Tab;

/// Source platform of a record, from the JSON `type` field.
/// Anything we don't know maps to `Unrecognized` so one odd record
/// doesn't take the whole cache down with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Udemy,
    Coursera,
    Producto,
    #[serde(other)]
    Unrecognized,
}

impl ItemKind {
    /// Kinds a user can filter by.
    pub const SELECTABLE: [ItemKind; 3] = [ItemKind::Udemy, ItemKind::Coursera, ItemKind::Producto];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Udemy => "udemy",
            ItemKind::Coursera => "coursera",
            ItemKind::Producto => "producto",
            ItemKind::Unrecognized => "unrecognized",
        }
    }

    /// Storefront name shown on badges and call-to-action links.
    pub fn platform_label(self) -> &'static str {
        match self {
            ItemKind::Udemy => "Udemy",
            ItemKind::Coursera => "Coursera",
            ItemKind::Producto => "Amazon",
            ItemKind::Unrecognized => "Otra tienda",
        }
    }

    /// Tab whose pool holds this kind, if any.
    pub fn tab(self) -> Option<Tab> {
        match self {
            ItemKind::Udemy | ItemKind::Coursera => Some(Tab::Courses),
            ItemKind::Producto => Some(Tab::Products),
            ItemKind::Unrecognized => None,
        }
    }

    /// Kinds offered by the platform selector on a given tab.
    pub fn options_for(tab: Tab) -> &'static [ItemKind] {
        match tab {
            Tab::Courses => &[ItemKind::Udemy, ItemKind::Coursera],
            Tab::Products => &[ItemKind::Producto],
        }
    }
}

/// One scraped product or course.
///
/// Fields are not validated: a missing string becomes `""`, a missing `type`
/// becomes `None` (and the item lands in neither tab pool).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogItem {
    /// Grouping key; compared trimmed and lower-cased.
    pub name: String,
    pub title: String,
    /// Display text, e.g. "$49.99".
    pub price: String,
    pub image: String,
    pub url: String,
    /// Outbound link template, may hold the affiliate placeholder.
    pub affiliate: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ItemKind>,
}

impl CatalogItem {
    #[inline]
    pub fn numeric_price(&self) -> Option<f64> {
        numeric_price(&self.price)
    }

    #[inline]
    pub fn tab(&self) -> Option<Tab> {
        self.kind.and_then(ItemKind::tab)
    }

    /// "Ver en Udemy" style call-to-action text.
    pub fn cta_label(&self) -> String {
        // Unknown or missing kinds fall back to the products storefront.
        let label = match self.kind {
            Some(k @ (ItemKind::Udemy | ItemKind::Coursera)) => k.platform_label(),
            Some(ItemKind::Producto | ItemKind::Unrecognized) | None => {
                ItemKind::Producto.platform_label()
            }
        };
        format!("Ver en {label}")
    }
}
