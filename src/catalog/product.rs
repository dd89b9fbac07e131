//! Product records as read from `products.json`.
//!
//! The upstream file is produced by scraping scripts and is occasionally
//! incomplete: prices arrive as `"$1,299.99"`, ratings as strings, review
//! counts as floats, fields go missing entirely. Deserialization never fails
//! on a single bad field; it falls back to the neutral value instead.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Highest possible star rating.
pub const MAX_RATING: f64 = 5.0;

/// A single catalog entry. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawProduct", rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub category: String,
    /// Always `>= 0`.
    pub price: f64,
    /// Present only when strictly positive.
    pub list_price: Option<f64>,
    /// Always within `[0, 5]`.
    pub rating: f64,
    pub reviews: u64,
    /// Never an empty string.
    pub badge: Option<String>,
    /// ISO-8601 date the product was added; the recency indicator for `latest`.
    pub added_at: Option<String>,
    pub image: Option<String>,
    pub url: Option<String>,
}

impl Product {
    /// A product with no price, rating or reviews yet.
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            price: 0.0,
            list_price: None,
            rating: 0.0,
            reviews: 0,
            badge: None,
            added_at: None,
            image: None,
            url: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = sanitize_price(Some(price));
        self
    }

    pub fn with_list_price(mut self, list_price: f64) -> Self {
        self.list_price = sanitize_list_price(Some(list_price));
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = sanitize_rating(Some(rating));
        self
    }

    pub fn with_reviews(mut self, reviews: u64) -> Self {
        self.reviews = reviews;
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = non_empty(badge.into());
        self
    }

    pub fn with_added_at(mut self, added_at: impl Into<String>) -> Self {
        self.added_at = non_empty(added_at.into());
        self
    }

    /// Fractional discount `(list - price) / list`, or 0 without a higher list price.
    pub fn discount_fraction(&self) -> f64 {
        match self.list_price {
            Some(list) if list > self.price => (list - self.price) / list,
            _ => 0.0,
        }
    }

    /// Absolute saving `list - price`, or 0 without a higher list price.
    pub fn savings(&self) -> f64 {
        match self.list_price {
            Some(list) if list > self.price => list - self.price,
            _ => 0.0,
        }
    }

    /// Quality weighted by social proof: `rating * log10(reviews + 10)`.
    ///
    /// The `+10` keeps unreviewed products above zero so their rating still
    /// separates them.
    pub fn popularity_score(&self) -> f64 {
        self.rating * (self.reviews as f64 + 10.0).log10()
    }
}

/// Wire shape of a product; every field is optional and loosely typed.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawProduct {
    id: Value,
    asin: Value,
    title: Value,
    category: Value,
    price: Value,
    list_price: Value,
    rating: Value,
    #[serde(alias = "reviewCount")]
    reviews: Value,
    badge: Value,
    #[serde(alias = "dateAdded")]
    added_at: Value,
    image: Value,
    #[serde(alias = "affiliateLink")]
    url: Value,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        let id = value_to_string(&raw.id)
            .or_else(|| value_to_string(&raw.asin))
            .unwrap_or_default();

        Self {
            id,
            title: value_to_string(&raw.title).unwrap_or_default(),
            category: value_to_string(&raw.category).unwrap_or_default(),
            price: sanitize_price(value_to_f64(&raw.price)),
            list_price: sanitize_list_price(value_to_f64(&raw.list_price)),
            rating: sanitize_rating(value_to_f64(&raw.rating)),
            reviews: sanitize_reviews(value_to_f64(&raw.reviews)),
            badge: value_to_string(&raw.badge).and_then(non_empty),
            added_at: value_to_string(&raw.added_at).and_then(non_empty),
            image: value_to_string(&raw.image).and_then(non_empty),
            url: value_to_string(&raw.url).and_then(non_empty),
        }
    }
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Numbers, or strings like `"4.5"`, `"$1,299.99"`, `"2,431"`.
fn value_to_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s
            .trim()
            .trim_start_matches('$')
            .replace(',', "")
            .parse::<f64>()
            .ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

fn sanitize_price(price: Option<f64>) -> f64 {
    price.filter(|p| p.is_finite() && *p > 0.0).unwrap_or(0.0)
}

fn sanitize_list_price(list_price: Option<f64>) -> Option<f64> {
    list_price.filter(|p| p.is_finite() && *p > 0.0)
}

fn sanitize_rating(rating: Option<f64>) -> f64 {
    rating
        .filter(|r| r.is_finite())
        .map_or(0.0, |r| r.clamp(0.0, MAX_RATING))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sanitize_reviews(reviews: Option<f64>) -> u64 {
    reviews
        .filter(|r| r.is_finite() && *r > 0.0)
        .map_or(0, |r| r.trunc() as u64)
}
