// src/paginate.rs
use std::ops::Range;

use crate::config::consts::ITEMS_PER_PAGE;

/// `ceil(count / ITEMS_PER_PAGE)`; zero items → zero pages.
#[inline]
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(ITEMS_PER_PAGE)
}

/// Positions shown on 1-based `page`. Out-of-range pages give an empty range,
/// never a clamped one.
pub fn page_range(count: usize, page: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(ITEMS_PER_PAGE).min(count);
    let end = page.saturating_mul(ITEMS_PER_PAGE).min(count);
    start..end.max(start)
}

/// Slice of `items` for 1-based `page`.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    &items[page_range(items.len(), page)]
}
