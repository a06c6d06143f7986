// tests/pipeline.rs
//
// Filter → sort → paginate over a category pool.
use comparador::catalog::{CatalogItem, ItemKind};
use comparador::config::consts::ITEMS_PER_PAGE;
use comparador::filter::{FilterState, PlatformFilter, PriceRange, SortMode, filter_indices};
use comparador::paginate::{paginate, total_pages};
use comparador::view::CatalogView;
use proptest::prelude::*;

fn item(title: &str, price: &str, kind: ItemKind) -> CatalogItem {
    CatalogItem {
        name: title.into(),
        title: title.into(),
        price: price.into(),
        kind: Some(kind),
        ..Default::default()
    }
}

/// 15 products priced $10, $20 … $150, in that order.
fn fifteen_products() -> Vec<CatalogItem> {
    (1..=15)
        .map(|i| item(&format!("Product {i}"), &format!("${}", i * 10), ItemKind::Producto))
        .collect()
}

fn titles<'a>(items: impl IntoIterator<Item = &'a CatalogItem>) -> Vec<&'a str> {
    items.into_iter().map(|i| i.title.as_str()).collect()
}

#[test]
fn unfiltered_catalog_pages_in_input_order() {
    let pool = fifteen_products();
    let view = CatalogView::from_pool(&pool, "", &FilterState::default());

    assert_eq!(view.len(), 15);
    assert_eq!(view.total_pages(), 2);

    let p1 = view.page(1);
    assert_eq!(p1.len(), 12);
    assert_eq!(p1.items[0].title, "Product 1");
    assert_eq!(p1.items[11].title, "Product 12");

    let p2 = view.page(2);
    assert_eq!(titles(p2.items.iter().copied()), vec!["Product 13", "Product 14", "Product 15"]);
    assert_eq!(p2.readout(), "Página 2 de 2");

    assert!(view.page(3).is_empty());
}

#[test]
fn price_ceiling_is_inclusive() {
    let pool = fifteen_products();
    let filters = FilterState { price_range: PriceRange::UpTo(50.0), ..Default::default() };
    let view = CatalogView::from_pool(&pool, "", &filters);

    assert_eq!(
        titles(view.iter()),
        vec!["Product 1", "Product 2", "Product 3", "Product 4", "Product 5"]
    );
    assert_eq!(view.total_pages(), 1);
}

#[test]
fn price_ceiling_drops_unpriced_items() {
    let pool = vec![
        item("A", "$5", ItemKind::Producto),
        item("B", "N/A", ItemKind::Producto),
        item("C", "Gratis", ItemKind::Producto),
    ];
    let filters = FilterState { price_range: PriceRange::UpTo(1000.0), ..Default::default() };
    assert_eq!(filter_indices(&pool, "", &filters), vec![0]);
}

#[test]
fn unpriced_items_sort_last_in_both_directions() {
    let pool = vec![
        item("thirty", "$30", ItemKind::Producto),
        item("na-1", "N/A", ItemKind::Producto),
        item("ten", "$10", ItemKind::Producto),
        item("na-2", "Consultar", ItemKind::Producto),
        item("twenty", "$20", ItemKind::Producto),
    ];

    let asc = FilterState { sort: SortMode::PriceAsc, ..Default::default() };
    let view = CatalogView::from_pool(&pool, "", &asc);
    assert_eq!(titles(view.iter()), vec!["ten", "twenty", "thirty", "na-1", "na-2"]);

    let desc = FilterState { sort: SortMode::PriceDesc, ..Default::default() };
    let view = CatalogView::from_pool(&pool, "", &desc);
    assert_eq!(titles(view.iter()), vec!["thirty", "twenty", "ten", "na-1", "na-2"]);
}

#[test]
fn price_sort_is_stable_for_equal_prices() {
    let pool = vec![
        item("first $10", "$10", ItemKind::Udemy),
        item("cheap", "$5", ItemKind::Udemy),
        item("second $10", "10.00", ItemKind::Coursera),
    ];
    let filters = FilterState { sort: SortMode::PriceDesc, ..Default::default() };
    let view = CatalogView::from_pool(&pool, "", &filters);
    assert_eq!(titles(view.iter()), vec!["first $10", "second $10", "cheap"]);
}

#[test]
fn search_is_case_insensitive_title_substring() {
    let pool = vec![
        item("Rust para Principiantes", "$10", ItemKind::Udemy),
        item("Python Avanzado", "$10", ItemKind::Udemy),
        item("RUST avanzado", "$10", ItemKind::Coursera),
    ];
    let view = CatalogView::from_pool(&pool, "rust", &FilterState::default());
    assert_eq!(titles(view.iter()), vec!["Rust para Principiantes", "RUST avanzado"]);

    let view = CatalogView::from_pool(&pool, "AVANZADO", &FilterState::default());
    assert_eq!(view.len(), 2);

    let view = CatalogView::from_pool(&pool, "java", &FilterState::default());
    assert!(view.is_empty());
}

#[test]
fn platform_filter_keeps_one_kind() {
    let pool = vec![
        item("a", "$1", ItemKind::Udemy),
        item("b", "$1", ItemKind::Coursera),
        item("c", "$1", ItemKind::Udemy),
    ];
    let filters = FilterState { platform: PlatformFilter::Only(ItemKind::Udemy), ..Default::default() };
    assert_eq!(filter_indices(&pool, "", &filters), vec![0, 2]);

    // A platform from the other tab matches nothing
    let filters = FilterState { platform: PlatformFilter::Only(ItemKind::Producto), ..Default::default() };
    assert!(filter_indices(&pool, "", &filters).is_empty());
}

#[test]
fn stages_compose() {
    let pool = vec![
        item("Rust A", "$40", ItemKind::Udemy),
        item("Rust B", "$15", ItemKind::Coursera),
        item("Rust C", "$25", ItemKind::Udemy),
        item("Go D", "$5", ItemKind::Udemy),
        item("Rust E", "$90", ItemKind::Udemy),
    ];
    let filters = FilterState {
        price_range: PriceRange::UpTo(50.0),
        platform: PlatformFilter::Only(ItemKind::Udemy),
        sort: SortMode::PriceAsc,
    };
    let view = CatalogView::from_pool(&pool, "rust", &filters);
    assert_eq!(titles(view.iter()), vec!["Rust C", "Rust A"]);
}

#[test]
fn filter_values_parse_from_their_wire_strings() {
    assert_eq!("all".parse::<PriceRange>().unwrap(), PriceRange::Any);
    assert_eq!("50".parse::<PriceRange>().unwrap(), PriceRange::UpTo(50.0));
    assert!("cheap".parse::<PriceRange>().is_err());

    assert_eq!("coursera".parse::<PlatformFilter>().unwrap(), PlatformFilter::Only(ItemKind::Coursera));
    assert_eq!("all".parse::<PlatformFilter>().unwrap(), PlatformFilter::All);

    for mode in SortMode::ALL {
        assert_eq!(mode.to_string().parse::<SortMode>().unwrap(), mode);
    }
}

/* ---------- properties ---------- */

fn arb_item() -> impl Strategy<Value = CatalogItem> {
    let title = prop::sample::select(vec!["Rust", "rust avanzado", "Python", "Teclado", "Mouse"]);
    let price = prop_oneof![
        4 => (0u32..300).prop_map(|p| format!("${p}.99")),
        1 => Just(s("N/A")),
        1 => Just(s("Gratis")),
    ];
    let kind = prop::sample::select(vec![ItemKind::Udemy, ItemKind::Coursera, ItemKind::Producto]);
    (title, price, kind).prop_map(|(t, p, k)| item(t, &p, k))
}

fn s(v: &str) -> String { v.to_string() }

fn arb_filters() -> impl Strategy<Value = FilterState> {
    let price = prop_oneof![Just(PriceRange::Any), (0u32..300).prop_map(|c| PriceRange::UpTo(f64::from(c)))];
    let platform = prop_oneof![
        Just(PlatformFilter::All),
        Just(PlatformFilter::Only(ItemKind::Udemy)),
        Just(PlatformFilter::Only(ItemKind::Producto)),
    ];
    let sort = prop::sample::select(SortMode::ALL.to_vec());
    (price, platform, sort).prop_map(|(price_range, platform, sort)| FilterState { price_range, platform, sort })
}

fn arb_search() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["", "rust", "RUST", "o", "zzz"]).prop_map(s)
}

proptest! {
    #[test]
    fn filtering_never_grows_the_pool(pool in prop::collection::vec(arb_item(), 0..80), q in arb_search(), f in arb_filters()) {
        prop_assert!(filter_indices(&pool, &q, &f).len() <= pool.len());
    }

    #[test]
    fn same_inputs_same_output(pool in prop::collection::vec(arb_item(), 0..80), q in arb_search(), f in arb_filters()) {
        prop_assert_eq!(filter_indices(&pool, &q, &f), filter_indices(&pool, &q, &f));
    }

    #[test]
    fn ascending_sort_orders_priced_items_then_unpriced(pool in prop::collection::vec(arb_item(), 0..80), q in arb_search(), f in arb_filters()) {
        let f = FilterState { sort: SortMode::PriceAsc, ..f };
        let prices: Vec<Option<f64>> = filter_indices(&pool, &q, &f)
            .into_iter()
            .map(|ix| pool[ix].numeric_price())
            .collect();

        for pair in prices.windows(2) {
            match (pair[0], pair[1]) {
                (Some(a), Some(b)) => prop_assert!(a <= b),
                (None, Some(_)) => prop_assert!(false, "unpriced item before a priced one"),
                _ => {}
            }
        }
    }

    #[test]
    fn page_sizes_follow_the_formula(n in 0usize..100, page in 1usize..12) {
        let items: Vec<usize> = (0..n).collect();
        let expected = n.saturating_sub((page - 1) * ITEMS_PER_PAGE).min(ITEMS_PER_PAGE);
        prop_assert_eq!(paginate(&items, page).len(), expected);
        prop_assert_eq!(total_pages(n), n.div_ceil(ITEMS_PER_PAGE));
    }
}
