//! Facet listing: what a shopper can filter by.

use super::load_catalog;
use crate::catalog::Facets;
use crate::state::CatalogState;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ListFacetsRequest {
    /// Path to a products.json file (defaults to the configured catalog)
    pub catalog: Option<String>,
}

pub async fn handle_list_facets(
    state: &Arc<CatalogState>,
    request: ListFacetsRequest,
) -> Result<String, String> {
    let catalog = load_catalog(state, request.catalog.as_deref()).await?;
    Ok(format_facets(&Facets::from_catalog(&catalog)))
}

pub fn format_facets(facets: &Facets) -> String {
    let mut output = format!("Catalog facets ({} products):\n\n", facets.total);

    output.push_str("Categories:\n");
    if facets.categories.is_empty() {
        output.push_str("  (none)\n");
    }
    for category in &facets.categories {
        let _ = writeln!(output, "  • {} ({})", category.name, category.count);
    }

    output.push_str("\nBadges:\n");
    if facets.badges.is_empty() {
        output.push_str("  (none)\n");
    }
    for badge in &facets.badges {
        let _ = writeln!(output, "  • {}", badge);
    }

    if let Some(bounds) = facets.price_bounds {
        let _ = writeln!(
            output,
            "\nPrice range: ${:.2} – ${:.2}",
            bounds.min, bounds.max
        );
    }

    output
}
