//! Filter facets derived from a catalog: the category tabs, badge toggles and
//! price slider bounds offered to the shopper.

use super::{Catalog, Product};
use ahash::{AHashMap, AHashSet};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBounds {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Facets {
    /// Sorted by count descending, then name.
    pub categories: Vec<CategoryCount>,
    /// Distinct badges, sorted.
    pub badges: Vec<String>,
    /// `None` for an empty catalog.
    pub price_bounds: Option<PriceBounds>,
    pub total: usize,
}

impl Facets {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::from_products(catalog.products())
    }

    pub fn from_products(products: &[Product]) -> Self {
        let mut counts: AHashMap<&str, usize> = AHashMap::new();
        let mut badges: AHashSet<&str> = AHashSet::new();
        let mut price_bounds: Option<PriceBounds> = None;

        for product in products {
            if !product.category.is_empty() {
                *counts.entry(product.category.as_str()).or_insert(0) += 1;
            }
            if let Some(badge) = product.badge.as_deref() {
                badges.insert(badge);
            }
            price_bounds = Some(match price_bounds {
                None => PriceBounds {
                    min: product.price,
                    max: product.price,
                },
                Some(bounds) => PriceBounds {
                    min: bounds.min.min(product.price),
                    max: bounds.max.max(product.price),
                },
            });
        }

        let mut categories: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(name, count)| CategoryCount {
                name: name.to_string(),
                count,
            })
            .collect();
        categories.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));

        let mut badges: Vec<String> = badges.into_iter().map(str::to_string).collect();
        badges.sort();

        Self {
            categories,
            badges,
            price_bounds,
            total: products.len(),
        }
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}
