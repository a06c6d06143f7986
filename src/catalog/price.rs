// src/catalog/price.rs
//
// Display prices come straight from scraped pages ("$1,299.99", "US$ 49",
// "Gratis"). Comparisons use the number we can read out of them:
//   1. drop every char outside [0-9.-]
//   2. read the longest leading decimal: -?digits[.digits] or -?.digits
// Anything without a digit in that position has no numeric price.

/// Numeric value of a display price, `None` when unreadable.
pub fn numeric_price(raw: &str) -> Option<f64> {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    leading_decimal(&kept)
}

fn leading_decimal(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    let mut end = 0;

    if bytes.first() == Some(&b'-') {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        // "5." is fine, "." alone is not
        if digits > 0 || frac_digits > 0 {
            end = frac_end;
            digits += frac_digits;
        }
    }

    if digits == 0 {
        return None;
    }
    s[..end].parse::<f64>().ok()
}
