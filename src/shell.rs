// src/shell.rs
//
// The presentation shell minus the pixels: tab, filters, search text and page,
// plus the cached view they produce. The GUI (and tests) drive it through the
// transitions below; nothing else writes to it.
//
// Transition rules:
// - switching tab resets the page to 1, keeps filters and search text;
// - changing filters or search keeps the page, even if it is now past the
//   last page;
// - prev/next are gated the way the pager buttons are: prev disabled on page 1,
//   next disabled on the last page. The page itself is never clamped.

use crate::{
    catalog::{CatalogItem, CategoryPools},
    config::state::{ShellState, Tab},
    filter::{FilterState, PlatformFilter, PriceRange, SortMode},
    view::{CatalogView, PageView},
};

pub struct Shell {
    pools: CategoryPools,
    state: ShellState,
    /// Cached pipeline output for the current tab/filters/search.
    item_ix: Vec<usize>,
}

impl Shell {
    pub fn new(pools: CategoryPools) -> Self {
        Self::with_state(pools, ShellState::default())
    }

    pub fn with_state(pools: CategoryPools, state: ShellState) -> Self {
        let mut shell = Self { pools, state, item_ix: Vec::new() };
        shell.rebuild_view();
        shell
    }

    /* ---------- reads ---------- */

    pub fn state(&self) -> &ShellState { &self.state }
    pub fn pools(&self) -> &CategoryPools { &self.pools }
    pub fn active_tab(&self) -> Tab { self.state.active_tab }
    pub fn current_page(&self) -> usize { self.state.current_page }
    pub fn filters(&self) -> &FilterState { &self.state.filters }
    pub fn search_query(&self) -> &str { &self.state.search_query }

    pub fn active_pool(&self) -> &[CatalogItem] {
        self.pools.pool(self.state.active_tab)
    }

    /// Filtered + sorted items for the active tab.
    pub fn view(&self) -> CatalogView<'_> {
        CatalogView::from_indices(self.active_pool(), self.item_ix.clone())
    }

    pub fn filtered_len(&self) -> usize { self.item_ix.len() }

    pub fn total_pages(&self) -> usize {
        crate::paginate::total_pages(self.item_ix.len())
    }

    /// The page currently selected (possibly empty if stale).
    pub fn page(&self) -> PageView<'_> {
        self.view().page(self.state.current_page)
    }

    /// Pager is only rendered when there is more than one page.
    pub fn show_pager(&self) -> bool { self.total_pages() > 1 }

    pub fn can_go_prev(&self) -> bool { self.state.current_page != 1 }

    pub fn can_go_next(&self) -> bool {
        self.state.current_page != self.total_pages()
    }

    /* ---------- transitions ---------- */

    pub fn switch_tab(&mut self, tab: Tab) {
        let prev = self.state.active_tab;
        self.state.current_page = 1;
        if tab != prev {
            self.state.active_tab = tab;
            self.rebuild_view();
        }
        logf!("UI: Tab switch {:?} → {:?} (page reset to 1)", prev, tab);
    }

    pub fn set_search(&mut self, query: &str) {
        if self.state.search_query == query { return; }
        self.state.search_query = s!(query);
        self.rebuild_view();
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        if self.state.filters == filters { return; }
        logf!("UI: Filters → {:?}", filters);
        self.state.filters = filters;
        self.rebuild_view();
    }

    pub fn set_platform(&mut self, platform: PlatformFilter) {
        self.set_filters(FilterState { platform, ..self.state.filters });
    }

    pub fn set_price_range(&mut self, price_range: PriceRange) {
        self.set_filters(FilterState { price_range, ..self.state.filters });
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.set_filters(FilterState { sort, ..self.state.filters });
    }

    /// "Anterior": no-op when disabled.
    pub fn prev_page(&mut self) {
        if !self.can_go_prev() { return; }
        self.state.current_page = self.state.current_page.saturating_sub(1).max(1);
    }

    /// "Siguiente": no-op when disabled.
    pub fn next_page(&mut self) {
        if !self.can_go_next() { return; }
        let next = (self.state.current_page + 1).min(self.total_pages());
        self.state.current_page = next.max(1);
    }

    fn rebuild_view(&mut self) {
        let pool = self.pools.pool(self.state.active_tab);
        self.item_ix = CatalogView::from_pool(pool, &self.state.search_query, &self.state.filters).item_ix;
        logd!(
            "View: {:?} search={:?} → {} of {} items",
            self.state.active_tab,
            self.state.search_query,
            self.item_ix.len(),
            pool.len()
        );
    }
}
