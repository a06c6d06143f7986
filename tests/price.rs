// tests/price.rs
use comparador::catalog::numeric_price;

#[test]
fn reads_common_display_prices() {
    assert_eq!(numeric_price("$49.99"), Some(49.99));
    assert_eq!(numeric_price("US$ 1,299.00"), Some(1299.0));
    assert_eq!(numeric_price("€ 15"), Some(15.0));
    assert_eq!(numeric_price("-$5"), Some(-5.0));
    assert_eq!(numeric_price(".5"), Some(0.5));
    assert_eq!(numeric_price("5."), Some(5.0));
}

#[test]
fn reads_only_the_leading_number() {
    // ranges and repeated dots keep the first number only
    assert_eq!(numeric_price("$10 - $20"), Some(10.0));
    assert_eq!(numeric_price("1.2.3"), Some(1.2));
    // exponents lose their `e` before parsing
    assert_eq!(numeric_price("1e3"), Some(13.0));
}

#[test]
fn unreadable_prices_have_no_value() {
    for raw in ["", "N/A", "Gratis", "-", ".", "--5", "$-.-"] {
        assert_eq!(numeric_price(raw), None, "input: {raw:?}");
    }
}
