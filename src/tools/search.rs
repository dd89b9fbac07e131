//! Product search handler: filters, ranks and renders one page of the listing.

use super::load_catalog;
use crate::catalog::{Catalog, Facets};
use crate::error::CriteriaError;
use crate::pipeline::{
    FilterCriteria, Page, PageRequest, PriceRange, ScoredProduct, SortMode, filter_and_rank,
    parse_category,
};
use crate::state::CatalogState;
use rapidfuzz::distance::jaro_winkler;
use rmcp::schemars;
use serde::Deserialize;
use std::{fmt::Write as _, sync::Arc};

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Free-text query; typos are tolerated. Leave empty to browse by sort order
    pub query: Option<String>,
    /// Category to restrict to ("All" or empty for every category)
    pub category: Option<String>,
    /// Minimum price, inclusive
    pub min_price: Option<f64>,
    /// Maximum price, inclusive
    pub max_price: Option<f64>,
    /// Minimum star rating (0-5), inclusive
    pub min_rating: Option<f64>,
    /// Only products carrying one of these badges (e.g. "Best Seller")
    #[serde(default)]
    pub badges: Vec<String>,
    /// Sort order when not searching: default, latest, price-low, price-high,
    /// rating, reviews, discount, savings
    pub sort: Option<String>,
    /// Page number, starting at 1 (default: 1)
    pub page: Option<usize>,
    /// Products per page (default: 12)
    pub page_size: Option<usize>,
    /// Path to a products.json file (defaults to the configured catalog)
    pub catalog: Option<String>,
}

impl SearchRequest {
    /// Translate request parameters into pipeline criteria.
    pub fn to_criteria(&self, default_sort: SortMode) -> Result<FilterCriteria, CriteriaError> {
        let sort_mode = match self.sort.as_deref() {
            Some(sort) if !sort.trim().is_empty() => sort.parse()?,
            _ => default_sort,
        };

        Ok(FilterCriteria {
            search_term: self.query.clone().unwrap_or_default(),
            category: self.category.as_deref().and_then(parse_category),
            price_range: PriceRange::new(
                self.min_price.unwrap_or(0.0),
                self.max_price.unwrap_or(f64::INFINITY),
            ),
            min_rating: self.min_rating.unwrap_or(0.0),
            selected_badges: self.badges.iter().cloned().collect(),
            sort_mode,
        })
    }
}

/// Execute a product search against the requested (or default) catalog.
pub async fn handle_search(
    state: &Arc<CatalogState>,
    request: SearchRequest,
) -> Result<String, String> {
    let criteria = request
        .to_criteria(state.config().listing.default_sort)
        .map_err(|e| e.to_string())?;

    let catalog = load_catalog(state, request.catalog.as_deref()).await?;

    if let Some(category) = criteria.category.as_deref()
        && !catalog.has_category(category)
    {
        return Ok(format_unknown_category(category, &catalog));
    }

    let page_request = PageRequest::new(
        request.page.unwrap_or(1),
        request
            .page_size
            .unwrap_or(state.config().listing.page_size),
    );

    let ranking = filter_and_rank(&catalog, &criteria, state.scorer());

    if ranking.is_empty() {
        return Ok(format_no_results(&criteria));
    }

    Ok(format_search_results(
        &ranking.page(page_request),
        &criteria,
        ranking.is_search(),
    ))
}

/// "Did you mean" listing for a category that is not in the catalog.
fn format_unknown_category(category: &str, catalog: &Catalog) -> String {
    let facets = Facets::from_catalog(catalog);
    let needle = category.to_lowercase();

    let mut suggestions: Vec<(&str, f64)> = facets
        .category_names()
        .map(|name| {
            let score = jaro_winkler::similarity(needle.chars(), name.to_lowercase().chars());
            (name, score)
        })
        .collect();
    suggestions.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut result = format!("Category '{}' not found.", category);
    let close: Vec<_> = suggestions
        .into_iter()
        .take(5)
        .filter(|(_, score)| *score > 0.8)
        .collect();

    if close.is_empty() {
        result.push_str(" Available categories:\n\n");
        for name in facets.category_names() {
            let _ = writeln!(result, "• `{}`", name);
        }
    } else {
        result.push_str(" Did you mean one of these?\n\n");
        for (name, _) in close {
            let _ = writeln!(result, "• `{}`", name);
        }
    }
    result
}

fn format_no_results(criteria: &FilterCriteria) -> String {
    let mut msg = if criteria.has_search_term() {
        format!("No products found for '{}'.\n\n", criteria.search_term.trim())
    } else {
        "No products match the current filters.\n\n".to_string()
    };

    msg.push_str("Search tips:\n");
    msg.push_str("• Try a shorter or more general term\n");
    msg.push_str("• Widen the price range or lower the minimum rating\n");
    if criteria.category.is_some() {
        msg.push_str("• Search across all categories\n");
    }
    if !criteria.selected_badges.is_empty() {
        msg.push_str("• Clear the badge filter\n");
    }

    msg
}

/// Format one page of ranked products into a readable listing.
fn format_search_results(
    page: &Page<ScoredProduct<'_>>,
    criteria: &FilterCriteria,
    searched: bool,
) -> String {
    let mut output = if searched {
        format!(
            "Products matching '{}' (by relevance):\n\n",
            criteria.search_term.trim()
        )
    } else {
        format!("Products sorted by {}:\n\n", criteria.sort_mode)
    };

    // page and page_size come straight from the request
    let offset = (page.page - 1).saturating_mul(page.page_size);
    for (idx, item) in page.items.iter().enumerate() {
        let product = item.product;

        let _ = write!(
            output,
            "{}. {}",
            offset.saturating_add(idx + 1),
            product.title
        );
        if !product.category.is_empty() {
            let _ = write!(output, " [{}]", product.category);
        }
        if searched {
            let _ = write!(output, " - relevance: {}", item.relevance_score);
        }
        output.push('\n');

        let _ = write!(output, "   ${:.2}", product.price);
        if product.discount_fraction() > 0.0
            && let Some(list) = product.list_price
        {
            let _ = write!(
                output,
                " (was ${:.2}, {:.0}% off)",
                list,
                product.discount_fraction() * 100.0
            );
        }
        let _ = write!(
            output,
            " · ★ {:.1} ({} reviews)",
            product.rating, product.reviews
        );
        if let Some(badge) = &product.badge {
            let _ = write!(output, " · {}", badge);
        }
        output.push('\n');

        if !product.id.is_empty() {
            let _ = writeln!(output, "   id: {}", product.id);
        }
        output.push('\n');
    }

    let noun = if page.total == 1 { "product" } else { "products" };
    if page.items.is_empty() {
        let _ = writeln!(
            output,
            "Page {} is past the end ({} pages, {} {}).",
            page.page, page.total_pages, page.total, noun
        );
    } else {
        let _ = writeln!(
            output,
            "Page {} of {} ({} {})",
            page.page, page.total_pages, page.total, noun
        );
    }

    output
}
