//! Filter criteria and sort modes supplied by the listing UI.

use crate::error::CriteriaError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Category value meaning "no restriction".
pub const ALL_CATEGORIES: &str = "All";

/// Inclusive price bounds. `min > max` admits nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `[0, +inf)`.
    pub const fn unbounded() -> Self {
        Self::new(0.0, f64::INFINITY)
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Ordering strategy used when no search term is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// `rating * log10(reviews + 10)`, descending.
    #[default]
    Default,
    /// Most recently added first.
    Latest,
    PriceLow,
    PriceHigh,
    /// Rating descending, then review count descending.
    Rating,
    Reviews,
    /// Percentage off list price, descending.
    Discount,
    /// Absolute amount off list price, descending.
    Savings,
}

impl SortMode {
    pub const ALL: [Self; 8] = [
        Self::Default,
        Self::Latest,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Rating,
        Self::Reviews,
        Self::Discount,
        Self::Savings,
    ];

    const NAMES: &'static [&'static str] = &[
        "default",
        "latest",
        "price-low",
        "price-high",
        "rating",
        "reviews",
        "discount",
        "savings",
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Latest => "latest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Reviews => "reviews",
            Self::Discount => "discount",
            Self::Savings => "savings",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = CriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == needle)
            .ok_or_else(|| CriteriaError::UnknownSortMode {
                given: s.to_string(),
                expected: Self::NAMES,
            })
    }
}

/// Everything that decides which products are shown and in what order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub search_term: String,
    /// `None` means every category.
    pub category: Option<String>,
    pub price_range: PriceRange,
    pub min_rating: f64,
    /// Empty means every product, badged or not.
    pub selected_badges: BTreeSet<String>,
    /// Ignored while `search_term` is non-empty.
    pub sort_mode: SortMode,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Restrict to one category; `"All"` (any case) or blank clears the restriction.
    pub fn category(mut self, category: impl AsRef<str>) -> Self {
        self.category = parse_category(category.as_ref());
        self
    }

    pub fn price_range(mut self, min: f64, max: f64) -> Self {
        self.price_range = PriceRange::new(min, max);
        self
    }

    pub fn min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.selected_badges.insert(badge.into());
        self
    }

    pub fn sort(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    /// Whether a free-text search is active.
    pub fn has_search_term(&self) -> bool {
        !self.search_term.trim().is_empty()
    }
}

/// Map a UI category selection to a filter value.
pub fn parse_category(category: &str) -> Option<String> {
    let trimmed = category.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_CATEGORIES) {
        None
    } else {
        Some(trimmed.to_string())
    }
}
