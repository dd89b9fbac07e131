//! Normalized search keys for products and queries.
//!
//! Lower-casing and splitting a title happens once per product when the
//! catalog is loaded, not once per keystroke.

use crate::catalog::Product;

/// Pre-normalized searchable fields of a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchKey {
    /// Lower-cased title.
    pub title: String,
    /// Lower-cased whitespace-delimited title tokens.
    pub tokens: Vec<String>,
    /// Lower-cased category.
    pub category: String,
    /// Lower-cased badge, empty when the product has none.
    pub badge: String,
}

impl SearchKey {
    pub fn new(product: &Product) -> Self {
        let title = product.title.to_lowercase();
        let tokens = tokenize(&title);
        Self {
            title,
            tokens,
            category: product.category.to_lowercase(),
            badge: product
                .badge
                .as_deref()
                .map(str::to_lowercase)
                .unwrap_or_default(),
        }
    }
}

/// A normalized free-text query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    term: String,
    char_len: usize,
}

impl Query {
    /// Trims and lower-cases the raw search box contents.
    pub fn new(raw: &str) -> Self {
        let term = raw.trim().to_lowercase();
        let char_len = term.chars().count();
        Self { term, char_len }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.char_len
    }

    /// An empty query matches every product.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }
}

/// Split on whitespace into owned tokens.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("Wireless Headphones", &["wireless", "headphones"])]
    #[case("  Apple   AirPods\tPro ", &["apple", "airpods", "pro"])]
    #[case("", &[])]
    #[case("   ", &[])]
    fn test_key_tokens(#[case] title: &str, #[case] expected: &[&str]) {
        let product = Product::new("p1", title, "Electronics");
        let key = SearchKey::new(&product);
        check!(key.tokens == expected.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn test_key_lowercases_all_fields() {
        let product = Product::new("p1", "USB-C Hub", "Computer Accessories").with_badge("Best Seller");
        let key = SearchKey::new(&product);
        check!(key.title == "usb-c hub");
        check!(key.category == "computer accessories");
        check!(key.badge == "best seller");
    }

    #[test]
    fn test_missing_badge_is_empty() {
        let key = SearchKey::new(&Product::new("p1", "Mug", "Kitchen"));
        check!(key.badge.is_empty());
    }

    #[rstest]
    #[case("", true, 0)]
    #[case("   ", true, 0)]
    #[case(" Hedphones ", false, 9)]
    #[case("Café", false, 4)]
    fn test_query_normalization(#[case] raw: &str, #[case] empty: bool, #[case] len: usize) {
        let query = Query::new(raw);
        check!(query.is_empty() == empty);
        check!(query.len() == len);
        check!(query.term() == raw.trim().to_lowercase());
    }
}
