//! Orderings for the listing.
//!
//! Both paths use a stable sort, so products that compare equal keep their
//! catalog order.

use super::ScoredProduct;
use super::criteria::SortMode;
use crate::catalog::Product;
use std::cmp::Ordering;

impl SortMode {
    /// Compare two products under this mode; `Less` means `a` is listed first.
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Default => b.popularity_score().total_cmp(&a.popularity_score()),
            // undated products sort after dated ones
            Self::Latest => b.added_at.cmp(&a.added_at),
            Self::PriceLow => a.price.total_cmp(&b.price),
            Self::PriceHigh => b.price.total_cmp(&a.price),
            Self::Rating => b
                .rating
                .total_cmp(&a.rating)
                .then_with(|| b.reviews.cmp(&a.reviews)),
            Self::Reviews => b.reviews.cmp(&a.reviews),
            Self::Discount => b.discount_fraction().total_cmp(&a.discount_fraction()),
            Self::Savings => b.savings().total_cmp(&a.savings()),
        }
    }
}

/// Explicit sort mode, used when there is no search term.
pub(crate) fn sort_by_mode(items: &mut [ScoredProduct<'_>], mode: SortMode) {
    items.sort_by(|a, b| {
        let ordering = mode.compare(a.product, b.product);
        if mode == SortMode::Latest {
            // later catalog entries are newer when dates tie or are missing
            ordering.then_with(|| b.position.cmp(&a.position))
        } else {
            ordering
        }
    });
}

/// Relevance descending, rating breaking ties.
pub(crate) fn sort_by_relevance(items: &mut [ScoredProduct<'_>]) {
    items.sort_by(|a, b| {
        b.relevance_score
            .cmp(&a.relevance_score)
            .then_with(|| b.product.rating.total_cmp(&a.product.rating))
    });
}
