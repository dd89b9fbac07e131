//! Independent product predicates.
//!
//! Each predicate looks at one criterion only, so they commute: any order
//! yields the same surviving set. The pipeline runs them before scoring
//! because they are far cheaper than fuzzy matching.

use super::criteria::{FilterCriteria, PriceRange};
use crate::catalog::Product;
use std::collections::BTreeSet;

pub fn matches_category(product: &Product, category: Option<&str>) -> bool {
    category.is_none_or(|c| product.category == c)
}

pub fn matches_price(product: &Product, range: &PriceRange) -> bool {
    range.contains(product.price)
}

pub fn matches_rating(product: &Product, min_rating: f64) -> bool {
    product.rating >= min_rating
}

/// Products without a badge fail any non-empty badge selection.
pub fn matches_badges(product: &Product, selected: &BTreeSet<String>) -> bool {
    selected.is_empty()
        || product
            .badge
            .as_ref()
            .is_some_and(|badge| selected.contains(badge))
}

/// All non-search predicates combined.
pub fn matches_filters(product: &Product, criteria: &FilterCriteria) -> bool {
    matches_category(product, criteria.category.as_deref())
        && matches_price(product, &criteria.price_range)
        && matches_rating(product, criteria.min_rating)
        && matches_badges(product, &criteria.selected_badges)
}
