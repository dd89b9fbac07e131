//! Filter-and-rank pipeline for the product listing.
//!
//! Flow: category → price → rating → badge predicates, then relevance scoring
//! when a search term is present, then ordering (relevance, or the chosen
//! sort mode when not searching), then pagination.
//!
//! Everything here is a pure function of the catalog and the criteria; the
//! same input always produces the same listing.

pub(crate) mod criteria;
pub(crate) mod filter;
pub(crate) mod listing;
pub(crate) mod paginate;
pub(crate) mod sort;

pub use criteria::{ALL_CATEGORIES, FilterCriteria, PriceRange, SortMode, parse_category};
pub use filter::{matches_badges, matches_category, matches_filters, matches_price, matches_rating};
pub use listing::ListingState;
pub use paginate::{Page, PageRequest, paginate, total_pages};

use crate::catalog::{Catalog, Product};
use crate::search::{PASS_THROUGH_SCORE, Query, RelevanceScorer};
use serde::Serialize;

/// A product that survived filtering, with its relevance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredProduct<'a> {
    pub product: &'a Product,
    /// 1 for every product when not searching.
    pub relevance_score: u32,
    /// Index in the catalog.
    pub position: usize,
}

/// The full ordered result of a filter-and-rank pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking<'a> {
    items: Vec<ScoredProduct<'a>>,
    /// Whether ordering came from relevance rather than a sort mode.
    searched: bool,
}

impl<'a> Ranking<'a> {
    pub fn items(&self) -> &[ScoredProduct<'a>] {
        &self.items
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_search(&self) -> bool {
        self.searched
    }

    pub fn products(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.items.iter().map(|item| item.product)
    }

    pub fn page(&self, request: PageRequest) -> Page<ScoredProduct<'a>> {
        paginate(&self.items, request)
    }

    pub fn into_items(self) -> Vec<ScoredProduct<'a>> {
        self.items
    }
}

/// Filter, score and order the catalog for display.
pub fn filter_and_rank<'a>(
    catalog: &'a Catalog,
    criteria: &FilterCriteria,
    scorer: &RelevanceScorer,
) -> Ranking<'a> {
    let start = std::time::Instant::now();
    let query = Query::new(&criteria.search_term);

    let mut items: Vec<ScoredProduct<'a>> = catalog
        .entries()
        .enumerate()
        .filter(|(_, (product, _))| matches_filters(product, criteria))
        .filter_map(|(position, (product, key))| {
            let relevance_score = if query.is_empty() {
                PASS_THROUGH_SCORE
            } else {
                scorer.score(key, &query)
            };
            (relevance_score > 0).then_some(ScoredProduct {
                product,
                relevance_score,
                position,
            })
        })
        .collect();

    let searched = !query.is_empty();
    if searched {
        sort::sort_by_relevance(&mut items);
    } else {
        sort::sort_by_mode(&mut items, criteria.sort_mode);
    }

    tracing::debug!(
        "Ranked {} of {} products (term: {:?}, sort: {}) in {:?}",
        items.len(),
        catalog.len(),
        query.term(),
        if searched { "relevance" } else { criteria.sort_mode.as_str() },
        start.elapsed()
    );

    Ranking { items, searched }
}
