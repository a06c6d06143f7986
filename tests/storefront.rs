// tests/storefront.rs
//
// Derived sections, affiliate links, image allowlist and page export.
use comparador::affiliate::AffiliateLinker;
use comparador::catalog::{CatalogItem, CategoryPools, ItemKind, group_by_name};
use comparador::config::state::Tab;
use comparador::config::options::AppOptions;
use comparador::csv::{ExportFormat, write_items};
use comparador::gui::app::App;
use comparador::filter::PlatformFilter;
use comparador::images::ImagePolicy;
use comparador::sections::{Sections, is_deal};

fn item(name: &str, price: &str, kind: Option<ItemKind>) -> CatalogItem {
    CatalogItem {
        name: name.into(),
        title: name.into(),
        price: price.into(),
        affiliate: "https://www.amazon.com/dp/B0?tag=TUAFILIADO".into(),
        kind,
        ..Default::default()
    }
}

#[test]
fn featured_takes_the_raw_head_and_popular_the_pool_heads() {
    let mut items = vec![
        item("Untyped", "$1", None),
        item("Curso 1", "$15", Some(ItemKind::Udemy)),
    ];
    items.extend((1..=7).map(|i| item(&format!("Producto {i}"), &format!("${}", i * 10), Some(ItemKind::Producto))));
    items.extend((2..=8).map(|i| item(&format!("Curso {i}"), "$30", Some(ItemKind::Coursera))));

    let pools = CategoryPools::from_grouped(&group_by_name(&items));
    let sections = Sections::build(&items, &pools);

    let featured: Vec<&str> = sections.featured.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(featured, vec!["Untyped", "Curso 1"]);

    assert_eq!(sections.popular(Tab::Products).len(), 5);
    assert_eq!(sections.popular(Tab::Products)[4].title, "Producto 5");
    assert_eq!(sections.popular(Tab::Courses).len(), 5);
    assert_eq!(sections.popular(Tab::Courses)[0].title, "Curso 1");
}

#[test]
fn deal_badges_use_per_tab_thresholds() {
    let product = |p: &str| item("p", p, Some(ItemKind::Producto));
    assert!(is_deal(&product("$49.99"), Tab::Products));
    assert!(!is_deal(&product("$50"), Tab::Products));
    assert!(!is_deal(&product("N/A"), Tab::Products));

    let course = |p: &str| item("c", p, Some(ItemKind::Udemy));
    assert!(is_deal(&course("$19.99"), Tab::Courses));
    assert!(!is_deal(&course("$20"), Tab::Courses));
}

#[test]
fn affiliate_placeholder_is_replaced_once() {
    let linker = AffiliateLinker::new("mitienda-21");
    assert!(linker.is_configured());
    assert_eq!(
        linker.link("https://amzn.to/x?tag=TUAFILIADO&ref=TUAFILIADO"),
        "https://amzn.to/x?tag=mitienda-21&ref=TUAFILIADO"
    );
    assert_eq!(linker.link("https://udemy.com/course/rust"), "https://udemy.com/course/rust");

    let unset = AffiliateLinker::default();
    assert!(!unset.is_configured());
    assert_eq!(unset.link("x?tag=TUAFILIADO"), "x?tag=TUAFILIADO");
}

#[test]
fn cta_labels_and_tab_platform_options() {
    assert_eq!(item("a", "", Some(ItemKind::Udemy)).cta_label(), "Ver en Udemy");
    assert_eq!(item("a", "", Some(ItemKind::Coursera)).cta_label(), "Ver en Coursera");
    assert_eq!(item("a", "", Some(ItemKind::Producto)).cta_label(), "Ver en Amazon");
    assert_eq!(item("a", "", None).cta_label(), "Ver en Amazon");

    assert_eq!(ItemKind::options_for(Tab::Courses), &[ItemKind::Udemy, ItemKind::Coursera]);
    assert_eq!(ItemKind::options_for(Tab::Products), &[ItemKind::Producto]);
    assert_eq!(PlatformFilter::Only(ItemKind::Producto).label(), "Amazon");
}

#[test]
fn image_policy_allows_known_https_hosts_only() {
    let policy = ImagePolicy::default();
    assert!(policy.allows("https://images-na.ssl-images-amazon.com/images/I/71.jpg"));
    assert!(policy.allows("https://img-b.udemycdn.com/course/240x135/1.jpg"));
    assert!(policy.allows("https://randomuser.me/api/portraits/women/44.jpg"));
    assert!(!policy.allows("http://img-b.udemycdn.com/course/1.jpg"));
    assert!(!policy.allows("https://evil.example.com/img-b.udemycdn.com/x.jpg"));
    assert!(!policy.allows("not a url"));
    assert!(!policy.allows(""));
}

fn export(items: &[CatalogItem], headers: bool, format: ExportFormat, linker: &AffiliateLinker) -> String {
    let mut buf = Vec::new();
    write_items(&mut buf, items, headers, format, linker).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn page_export_fills_links_and_quotes_fields() {
    let items = vec![
        item("Teclado, mecánico", "$49.99", Some(ItemKind::Producto)),
        item("Curso \"Rust\"", "$10", Some(ItemKind::Udemy)),
    ];
    let linker = AffiliateLinker::new("id-1");

    let csv = export(&items, true, ExportFormat::Csv, &linker);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "Title,Price,Platform,Link");
    assert_eq!(lines[1], "\"Teclado, mecánico\",$49.99,Amazon,https://www.amazon.com/dp/B0?tag=id-1");
    assert_eq!(lines[2], "\"Curso \"\"Rust\"\"\",$10,Udemy,https://www.amazon.com/dp/B0?tag=id-1");

    let tsv = export(&items[..1], false, ExportFormat::Tsv, &linker);
    assert_eq!(tsv, "Teclado, mecánico\t$49.99\tAmazon\thttps://www.amazon.com/dp/B0?tag=id-1\n");
}

#[test]
fn empty_catalog_builds_a_blank_storefront() {
    let app = App::from_items(AppOptions::default(), vec![]);

    assert_eq!(app.sections, Sections::default());
    assert!(app.shell.pools().is_empty());
    assert!(app.shell.page().is_empty());
    assert!(!app.shell.show_pager());
    assert!(app.search_text.is_empty());
    assert!(!app.scroll_to_list);
}
